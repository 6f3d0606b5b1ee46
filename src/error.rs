use thiserror::Error;

/// Failures at the search boundary. Interpretation itself never fails.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Property store failed: {0}")]
    Store(#[source] anyhow::Error),
}

impl SearchError {
    /// Whether the caller sent a bad request (as opposed to a server fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, SearchError::EmptyQuery)
    }
}
