//! Runtime configuration.
//!
//! Defaults can be overridden with environment variables:
//!
//! | Variable | Setting |
//! |---|---|
//! | `PROPERTY_SEARCH_CATALOG` | listing catalog (JSON) to search |
//! | `PROPERTY_SEARCH_OUTPUT` | where the response JSON is written |
//! | `PROPERTY_SEARCH_LIMIT` | result cap, at most 50 |
//! | `PROPERTY_SEARCH_LOG` | default log level when `RUST_LOG` is unset |

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::search::MAX_RESULTS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    pub catalog_path: PathBuf,
    pub output_path: PathBuf,
    pub result_limit: usize,
    pub log_level: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("properties.json"),
            output_path: PathBuf::from("search_results.json"),
            result_limit: MAX_RESULTS,
            log_level: "info".to_string(),
        }
    }
}

impl SearchConfig {
    /// Load configuration from environment variables
    pub fn load_from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("PROPERTY_SEARCH_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("PROPERTY_SEARCH_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }

        if let Some(limit) = lookup("PROPERTY_SEARCH_LIMIT") {
            match limit.trim().parse::<usize>() {
                Ok(0) | Err(_) => {
                    warn!("Ignoring invalid PROPERTY_SEARCH_LIMIT {:?}", limit);
                }
                Ok(value) => config.result_limit = value.min(MAX_RESULTS),
            }
        }

        if let Some(level) = lookup("PROPERTY_SEARCH_LOG") {
            config.log_level = level;
        }

        config
    }
}
