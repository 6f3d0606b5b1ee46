pub mod interpreter;
pub mod predicates;
pub mod service;
pub mod summary;
pub mod traits;
pub mod types;

pub use interpreter::interpret;
pub use predicates::{build_predicates, Predicate, QueryPlan, SortKey};
pub use service::PropertySearch;
pub use summary::summarize;
pub use traits::PropertyStore;
pub use types::{SearchContext, SearchRequest, SearchResponse, StoreResult, MAX_RESULTS};
