//! Storage-agnostic predicates and sort keys built from [`SearchFilters`].

use serde::{Deserialize, Serialize};

use crate::models::{Country, PropertyStatus, SearchFilters, SortMetric};

/// Listing field a predicate constrains
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum PredicateField {
    Country,
    Price,
    Bedrooms,
    Bathrooms,
    GoldenVisaEligible,
    Status,
}

/// Right-hand side of an equality predicate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PredicateValue {
    Country(Country),
    Status(PropertyStatus),
    Integer(u64),
    Bool(bool),
}

/// A single field constraint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Predicate {
    /// `field == value`
    Equals {
        field: PredicateField,
        value: PredicateValue,
    },
    /// `min <= field <= max`, either bound optional
    Range {
        field: PredicateField,
        min: Option<u64>,
        max: Option<u64>,
    },
    /// `field >= value`
    AtLeast { field: PredicateField, value: u64 },
}

/// Field a result list can be ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    ExpectedRoi,
    RentalYield,
    CreatedAt,
}

impl SortField {
    /// Dotted path of the field on a listing record
    pub fn path(&self) -> &'static str {
        match self {
            SortField::ExpectedRoi => "investmentMetrics.expectedRoi",
            SortField::RentalYield => "investmentMetrics.rentalYield",
            SortField::CreatedAt => "createdAt",
        }
    }
}

/// Every key the builder emits is descending (highest metric, newest first)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Desc,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Everything a store needs to run a search: all predicates must hold,
/// results ordered by `sort` in sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    pub sort: Vec<SortKey>,
}

/// Compile filters into predicates and a sort-key sequence.
///
/// Bedrooms compile to equality (or a range), bathrooms to a minimum.
/// Property type and goal have no predicate of their own; a goal only
/// shows up through the golden visa flag or the sort key. The sort
/// sequence always ends with `createdAt` descending.
pub fn build_predicates(filters: &SearchFilters) -> QueryPlan {
    let mut predicates = Vec::new();

    if let Some(country) = filters.country {
        predicates.push(Predicate::Equals {
            field: PredicateField::Country,
            value: PredicateValue::Country(country),
        });
    }

    if filters.min_price.is_some() || filters.max_price.is_some() {
        predicates.push(Predicate::Range {
            field: PredicateField::Price,
            min: filters.min_price,
            max: filters.max_price,
        });
    }

    if let Some(bedrooms) = filters.bedrooms {
        predicates.push(Predicate::Equals {
            field: PredicateField::Bedrooms,
            value: PredicateValue::Integer(u64::from(bedrooms)),
        });
    } else if filters.min_bedrooms.is_some() || filters.max_bedrooms.is_some() {
        predicates.push(Predicate::Range {
            field: PredicateField::Bedrooms,
            min: filters.min_bedrooms.map(u64::from),
            max: filters.max_bedrooms.map(u64::from),
        });
    }

    if let Some(bathrooms) = filters.bathrooms {
        predicates.push(Predicate::AtLeast {
            field: PredicateField::Bathrooms,
            value: u64::from(bathrooms),
        });
    }

    if filters.is_golden_visa_eligible == Some(true) {
        predicates.push(Predicate::Equals {
            field: PredicateField::GoldenVisaEligible,
            value: PredicateValue::Bool(true),
        });
    }

    if let Some(status) = filters.status {
        predicates.push(Predicate::Equals {
            field: PredicateField::Status,
            value: PredicateValue::Status(status),
        });
    }

    let mut sort = Vec::with_capacity(2);
    match filters.sort_by {
        Some(SortMetric::Roi) => sort.push(SortKey::desc(SortField::ExpectedRoi)),
        Some(SortMetric::RentalYield) => sort.push(SortKey::desc(SortField::RentalYield)),
        None => {}
    }
    sort.push(SortKey::desc(SortField::CreatedAt));

    QueryPlan { predicates, sort }
}
