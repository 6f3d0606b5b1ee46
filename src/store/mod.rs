pub mod catalog;
pub mod memory;

pub use catalog::{load_catalog, load_or_sample, sample_catalog};
pub use memory::InMemoryStore;
