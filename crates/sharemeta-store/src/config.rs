//! Configuration for metadata backends

use serde::{Deserialize, Serialize};

/// Store configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend type
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Backend configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    /// In-memory backend (default, single-instance only)
    #[default]
    InMemory,

    /// PostgreSQL backend
    #[cfg(feature = "postgres-backend")]
    Postgres {
        /// PostgreSQL connection URL
        url: String,

        /// Connection pool size
        #[serde(default = "default_pool_size")]
        pool_size: u32,

        /// Prefix for the item metadata and options tables
        #[serde(default = "default_table_prefix")]
        table_prefix: String,
    },
}

#[allow(dead_code)]
fn default_pool_size() -> u32 {
    10
}

#[allow(dead_code)]
fn default_table_prefix() -> String {
    "sharemeta".to_string()
}
