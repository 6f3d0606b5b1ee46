pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod store;

pub use config::SearchConfig;
pub use error::SearchError;
pub use search::{PropertySearch, PropertyStore, SearchRequest, SearchResponse};
