//! Metadata store adapter
//!
//! Maps (scope, key) pairs onto the host primitives: item scopes use the
//! item's metadata, the defaults scope uses a global option. Keys are
//! namespaced through [`FieldKeys`].

use crate::{MetadataBackend, Result};
use sharemeta_core::{Field, FieldKeys, Scope};
use tracing::trace;

/// Scope-aware string store over a [`MetadataBackend`]
#[derive(Debug, Clone)]
pub struct MetadataStore<B> {
    backend: B,
    keys: FieldKeys,
}

impl<B: MetadataBackend> MetadataStore<B> {
    /// Create a store over a backend
    pub fn new(backend: B, keys: FieldKeys) -> Self {
        Self { backend, keys }
    }

    /// The underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Key naming in use
    pub fn keys(&self) -> &FieldKeys {
        &self.keys
    }

    /// Read the value stored under `key` in `scope`
    ///
    /// Absent values read as the empty string.
    pub async fn get(&self, scope: Scope, key: &str) -> Result<String> {
        let full_key = self.keys.storage_key(scope, key);
        trace!(%scope, key = %full_key, "Store GET");

        let value = match scope {
            Scope::Item(id) => self.backend.get_item_meta(id, &full_key).await?,
            Scope::Defaults => self.backend.get_option(&full_key).await?,
        };

        Ok(value.unwrap_or_default())
    }

    /// Overwrite the value stored under `key` in `scope`
    pub async fn set(&self, scope: Scope, key: &str, value: &str) -> Result<()> {
        let full_key = self.keys.storage_key(scope, key);
        trace!(%scope, key = %full_key, "Store SET");

        match scope {
            Scope::Item(id) => self.backend.set_item_meta(id, &full_key, value).await,
            Scope::Defaults => self.backend.set_option(&full_key, value).await,
        }
    }

    /// Read a field's value in `scope`
    pub async fn get_field(&self, scope: Scope, field: Field) -> Result<String> {
        self.get(scope, field.storage_subkey()).await
    }

    /// Write a field's value in `scope`
    pub async fn set_field(&self, scope: Scope, field: Field, value: &str) -> Result<()> {
        self.set(scope, field.storage_subkey(), value).await
    }

    /// Check the backend using an option inside this store's namespace
    pub async fn health_check(&self) -> Result<()> {
        let check_key = self.keys.storage_key(Scope::Defaults, HEALTH_SUBKEY);
        self.backend.health_check(&check_key).await
    }
}

/// Option subkey used by [`MetadataStore::health_check`]; no field stores under it
const HEALTH_SUBKEY: &str = "__health";
