//! Metadata backend trait definition

use crate::{Error, Result};
use async_trait::async_trait;

/// Persistence primitives of the host platform
///
/// Values are plain strings. A missing key reads as `None`; callers decide
/// what absence means.
#[async_trait]
pub trait MetadataBackend: Send + Sync + Clone + std::fmt::Debug + 'static {
    /// Get a metadata value attached to an item
    async fn get_item_meta(&self, item_id: u64, key: &str) -> Result<Option<String>>;

    /// Set a metadata value on an item, replacing any previous value
    async fn set_item_meta(&self, item_id: u64, key: &str, value: &str) -> Result<()>;

    /// Get a global option
    async fn get_option(&self, key: &str) -> Result<Option<String>>;

    /// Set a global option, replacing any previous value
    async fn set_option(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a global option
    async fn delete_option(&self, key: &str) -> Result<()>;

    /// Health check - verify backend is reachable
    ///
    /// The default writes, reads back and deletes the option `check_key`.
    /// Callers pass a key inside their own namespace so no host option is
    /// touched.
    async fn health_check(&self, check_key: &str) -> Result<()> {
        self.set_option(check_key, "ok").await?;
        let result = self.get_option(check_key).await?;
        self.delete_option(check_key).await?;

        if result.as_deref() == Some("ok") {
            Ok(())
        } else {
            Err(Error::Backend("Health check failed".to_string()))
        }
    }
}
