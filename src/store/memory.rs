use crate::models::Property;
use crate::search::predicates::{
    Predicate, PredicateField, PredicateValue, QueryPlan, SortDirection, SortField, SortKey,
};
use crate::search::traits::PropertyStore;
use crate::search::types::StoreResult;
use anyhow::Result;
use async_trait::async_trait;
use std::cmp::Ordering;
use tracing::debug;

/// Store that evaluates query plans against listings held in memory
pub struct InMemoryStore {
    properties: Vec<Property>,
}

impl InMemoryStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[async_trait]
impl PropertyStore for InMemoryStore {
    async fn execute(&self, plan: &QueryPlan, limit: usize) -> Result<StoreResult> {
        let mut matched: Vec<&Property> = self
            .properties
            .iter()
            .filter(|property| property.published)
            .filter(|property| plan.predicates.iter().all(|p| matches(property, p)))
            .collect();

        matched.sort_by(|a, b| compare(a, b, &plan.sort));

        let total = matched.len();
        debug!("{} of {} listings matched", total, self.properties.len());

        Ok(StoreResult {
            properties: matched.into_iter().take(limit).cloned().collect(),
            total,
        })
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}

fn numeric_field(property: &Property, field: PredicateField) -> Option<u64> {
    match field {
        PredicateField::Price => Some(property.price),
        PredicateField::Bedrooms => Some(u64::from(property.bedrooms)),
        PredicateField::Bathrooms => Some(u64::from(property.bathrooms)),
        _ => None,
    }
}

fn matches(property: &Property, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::Equals { field, value } => match (field, value) {
            (PredicateField::Country, PredicateValue::Country(country)) => {
                property.country == *country
            }
            (PredicateField::Status, PredicateValue::Status(status)) => property.status == *status,
            (PredicateField::GoldenVisaEligible, PredicateValue::Bool(flag)) => {
                property.golden_visa_eligible == *flag
            }
            (field, PredicateValue::Integer(expected)) => {
                numeric_field(property, *field) == Some(*expected)
            }
            // A value of the wrong kind for the field can never match
            _ => false,
        },
        Predicate::Range { field, min, max } => match numeric_field(property, *field) {
            Some(actual) => {
                min.map_or(true, |min| actual >= min) && max.map_or(true, |max| actual <= max)
            }
            None => false,
        },
        Predicate::AtLeast { field, value } => {
            numeric_field(property, *field).map_or(false, |actual| actual >= *value)
        }
    }
}

fn compare(a: &Property, b: &Property, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = match key.field {
            SortField::ExpectedRoi => compare_metric(a.expected_roi(), b.expected_roi(), key.direction),
            SortField::RentalYield => {
                compare_metric(a.rental_yield(), b.rental_yield(), key.direction)
            }
            SortField::CreatedAt => directed(a.created_at.cmp(&b.created_at), key.direction),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Listings missing the metric sort after every listing that has it
fn compare_metric(a: Option<f64>, b: Option<f64>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => directed(a.total_cmp(&b), direction),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Desc => ordering.reverse(),
    }
}
