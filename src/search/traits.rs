use crate::search::predicates::QueryPlan;
use crate::search::types::StoreResult;
use anyhow::Result;
use async_trait::async_trait;

/// Executes a query plan against wherever listings live.
/// Implementations decide how predicates and sort keys map onto storage.
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// Run the plan, returning at most `limit` listings plus the full match count
    async fn execute(&self, plan: &QueryPlan, limit: usize) -> Result<StoreResult>;

    /// Get the name of the backing store
    fn store_name(&self) -> &'static str;
}
