use serde::{Deserialize, Serialize};

use crate::models::{Property, SearchFilters};

/// Most listings a single search ever returns
pub const MAX_RESULTS: usize = 50;

/// Caller-supplied context. Accepted and logged, not used for interpretation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    pub user_id: Option<String>,
    #[serde(default)]
    pub previous_searches: Vec<String>,
}

/// Inbound search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub context: Option<SearchContext>,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            context: None,
        }
    }

    pub fn with_context(self, context: SearchContext) -> Self {
        Self {
            context: Some(context),
            ..self
        }
    }
}

/// What a store hands back for a query plan
#[derive(Debug, Clone, Default)]
pub struct StoreResult {
    /// Matching listings, already sorted and capped
    pub properties: Vec<Property>,
    /// Number of listings that matched before capping
    pub total: usize,
}

/// Response returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub filters: SearchFilters,
    pub summary: String,
    pub properties: Vec<Property>,
    /// Length of `properties`, not the uncapped match count
    pub count: usize,
}
