use crate::error::SearchError;
use crate::search::interpreter::interpret;
use crate::search::predicates::build_predicates;
use crate::search::summary::summarize;
use crate::search::traits::PropertyStore;
use crate::search::types::{SearchRequest, SearchResponse, MAX_RESULTS};
use tracing::{debug, info};

/// Natural-language property search over a [`PropertyStore`]
pub struct PropertySearch<S> {
    store: S,
    limit: usize,
}

impl<S: PropertyStore> PropertySearch<S> {
    /// Create a search service returning up to [`MAX_RESULTS`] listings
    pub fn new(store: S) -> Self {
        Self::with_limit(store, MAX_RESULTS)
    }

    /// Create a search service with a custom result cap, clamped to `1..=MAX_RESULTS`
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self {
            store,
            limit: limit.clamp(1, MAX_RESULTS),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Interpret the request, run it against the store and summarize the outcome
    pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse, SearchError> {
        if request.query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        if let Some(context) = &request.context {
            debug!(
                "Search context: user={:?}, {} previous searches",
                context.user_id,
                context.previous_searches.len()
            );
        }

        let filters = interpret(&request.query);
        let plan = build_predicates(&filters);
        debug!(
            "Query plan: {} predicates, {} sort keys",
            plan.predicates.len(),
            plan.sort.len()
        );

        let result = self
            .store
            .execute(&plan, self.limit)
            .await
            .map_err(SearchError::Store)?;

        let count = result.properties.len();
        info!(
            "🔎 {:?} matched {} listings in {} (returning {})",
            request.query,
            result.total,
            self.store.store_name(),
            count
        );

        let summary = summarize(&request.query, &filters, count);

        Ok(SearchResponse {
            query: request.query,
            filters,
            summary,
            properties: result.properties,
            count,
        })
    }
}
