//! Item submission handler

use sharemeta_core::{Field, FieldKeys, ItemId, Result, Scope};
use sharemeta_plugin_api::SubmittedForm;
use sharemeta_store::{MetadataBackend, MetadataStore};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Stores an item's metadata from its submitted edit form
///
/// Only keys that are exactly an item-scope field identifier are written.
/// Fields missing from the submission keep their stored value.
#[derive(Debug, Clone)]
pub struct SubmissionHandler {
    key_map: HashMap<String, Field>,
}

impl SubmissionHandler {
    /// Create a handler recognising the item identifiers of `keys`
    pub fn new(keys: &FieldKeys) -> Self {
        Self {
            key_map: keys.item_key_map(),
        }
    }

    /// Field a submitted key writes to, if any
    pub fn field_for(&self, key: &str) -> Option<Field> {
        self.key_map.get(key).copied()
    }

    /// Write every recognised pair to `item_id`
    ///
    /// Returns the fields written, in submission order. A key submitted twice
    /// is written twice; the last value wins.
    pub async fn handle<B: MetadataBackend>(
        &self,
        store: &MetadataStore<B>,
        item_id: ItemId,
        form: &SubmittedForm,
    ) -> Result<Vec<Field>> {
        let mut written = Vec::new();

        for (key, value) in form.iter() {
            let Some(field) = self.field_for(key) else {
                trace!(item_id, key, "Ignoring unrelated submitted key");
                continue;
            };

            store.set_field(Scope::Item(item_id), field, value).await?;
            written.push(field);
        }

        debug!(item_id, written = written.len(), "Saved item metadata");

        Ok(written)
    }
}
