use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Countries the marketplace lists properties in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Country {
    Georgia,
    Cyprus,
    Greece,
    Lebanon,
}

impl Country {
    /// Stored enum form, e.g. `CYPRUS`
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Georgia => "GEORGIA",
            Country::Cyprus => "CYPRUS",
            Country::Greece => "GREECE",
            Country::Lebanon => "LEBANON",
        }
    }
}

/// Coarse investment intent inferred from a query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvestmentGoal {
    GoldenVisa,
    HighRoi,
    PassiveIncome,
}

/// Investment metric a search can be ordered by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SortMetric {
    Roi,
    RentalYield,
}

/// Construction / sale stage of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    OffPlan,
    NewBuild,
    Resale,
}

impl PropertyStatus {
    /// Stored enum form, e.g. `OFF_PLAN`
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::OffPlan => "OFF_PLAN",
            PropertyStatus::NewBuild => "NEW_BUILD",
            PropertyStatus::Resale => "RESALE",
        }
    }
}

/// Structured filters extracted from a free-text search.
///
/// Every field is optional; `None` means "no constraint". `bedrooms` and the
/// `min_bedrooms`/`max_bedrooms` pair are never set together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<u32>,
    /// Minimum number of bathrooms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<InvestmentGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_golden_visa_eligible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortMetric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PropertyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl SearchFilters {
    /// True when no rule matched
    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }
}

/// Projected returns for a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentMetrics {
    /// Expected ROI in percent
    pub expected_roi: Option<f64>,
    /// Gross rental yield in percent
    pub rental_yield: Option<f64>,
}

/// Core property listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub country: Country,
    pub city: String,
    pub property_type: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqm: u32,
    pub status: PropertyStatus,
    pub golden_visa_eligible: bool,
    pub investment_metrics: Option<InvestmentMetrics>,
    #[serde(default = "default_published")]
    pub published: bool,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

fn default_published() -> bool {
    true
}

impl Property {
    pub fn expected_roi(&self) -> Option<f64> {
        self.investment_metrics.as_ref().and_then(|m| m.expected_roi)
    }

    pub fn rental_yield(&self) -> Option<f64> {
        self.investment_metrics.as_ref().and_then(|m| m.rental_yield)
    }
}
