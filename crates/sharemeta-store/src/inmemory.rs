//! In-memory metadata backend implementation

use crate::{MetadataBackend, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// In-memory metadata backend
///
/// Fast, zero dependencies, but single-instance only.
/// Perfect for development, testing, and single-node deployments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    item_meta: Arc<DashMap<(u64, String), String>>,
    options: Arc<DashMap<String, String>>,
}

impl InMemoryBackend {
    /// Create a new in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored values (item metadata and options)
    pub fn len(&self) -> usize {
        self.item_meta.len() + self.options.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.item_meta.is_empty() && self.options.is_empty()
    }

    /// Remove everything (dev/test only)
    pub fn clear(&self) {
        debug!("InMemory CLEAR - removing all metadata and options");
        self.item_meta.clear();
        self.options.clear();
    }
}

#[async_trait]
impl MetadataBackend for InMemoryBackend {
    async fn get_item_meta(&self, item_id: u64, key: &str) -> Result<Option<String>> {
        trace!(item_id, key, "InMemory GET item meta");
        Ok(self
            .item_meta
            .get(&(item_id, key.to_string()))
            .map(|v| v.value().clone()))
    }

    async fn set_item_meta(&self, item_id: u64, key: &str, value: &str) -> Result<()> {
        trace!(item_id, key, "InMemory SET item meta");
        self.item_meta
            .insert((item_id, key.to_string()), value.to_string());
        Ok(())
    }

    async fn get_option(&self, key: &str) -> Result<Option<String>> {
        trace!(key, "InMemory GET option");
        Ok(self.options.get(key).map(|v| v.value().clone()))
    }

    async fn set_option(&self, key: &str, value: &str) -> Result<()> {
        trace!(key, "InMemory SET option");
        self.options.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_option(&self, key: &str) -> Result<()> {
        trace!(key, "InMemory DELETE option");
        self.options.remove(key);
        Ok(())
    }
}
