//! Key naming
//!
//! A single scheme, `{namespace}-{subnamespace}-{subkey}`, produces both the
//! identifiers of rendered inputs and the keys values are stored under. The
//! namespace may not contain `-`, which keeps the mapping from (scope, field)
//! pairs to keys injective.

use crate::{Error, Field, Result, Scope};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "facebookmetadata";

/// Validated plugin namespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace, rejecting empty names and characters outside
    /// `[a-z0-9_]`
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::Config("namespace cannot be empty".to_string()));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(Error::Config(format!(
                "namespace '{name}' contains invalid character '{bad}'"
            )));
        }
        Ok(Self(name))
    }

    /// Namespace as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Namespace {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(ns: Namespace) -> Self {
        ns.0
    }
}

/// Builds every key and identifier the plugin uses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldKeys {
    ns: Namespace,
}

impl FieldKeys {
    /// Create key builder for a namespace
    pub fn new(ns: Namespace) -> Self {
        Self { ns }
    }

    /// The namespace
    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Full storage key for a subkey in a scope
    pub fn storage_key(&self, scope: Scope, subkey: &str) -> String {
        format!("{}-{}-{}", self.ns, scope.subnamespace(), subkey)
    }

    /// Base identifier of a field's row (`{ns}-{sub}-{field}`)
    pub fn field_id(&self, scope: Scope, field: Field) -> String {
        self.storage_key(scope, field.name())
    }

    /// Identifier of the text input holding a field's value
    ///
    /// For the image field this is the base identifier with `_url` appended,
    /// which is also its storage key.
    pub fn input_id(&self, scope: Scope, field: Field) -> String {
        self.storage_key(scope, field.storage_subkey())
    }

    /// Class carried by every media-picker button
    pub fn image_button_class(&self) -> String {
        format!("{}-image", self.ns)
    }

    /// Class of the rendered form table
    pub fn table_class(&self) -> String {
        format!("{}-metadataformtable", self.ns)
    }

    /// Exact mapping from submitted item-scope keys to fields
    pub fn item_key_map(&self) -> HashMap<String, Field> {
        Field::ALL
            .into_iter()
            .map(|field| (self.input_id(Scope::Item(0), field), field))
            .collect()
    }
}
