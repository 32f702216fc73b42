//! Field registry
//!
//! The supported fields correspond to OpenGraph meta properties. Their order
//! is the order in which forms are rendered and head tags are emitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sharing metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// `og:title`
    Title,
    /// `og:image`, stored as a URL string
    Image,
    /// `og:description`
    Description,
}

impl Field {
    /// All fields in registry order
    pub const ALL: [Field; 3] = [Field::Title, Field::Image, Field::Description];

    /// Canonical field name
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Image => "image",
            Field::Description => "description",
        }
    }

    /// Key fragment the value is stored under
    pub fn storage_subkey(self) -> &'static str {
        match self {
            Field::Image => "image_url",
            other => other.name(),
        }
    }

    /// Human-facing label (capitalised name)
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Image => "Image",
            Field::Description => "Description",
        }
    }

    /// OpenGraph property emitted in the page head
    pub fn og_property(self) -> String {
        format!("og:{}", self.name())
    }

    /// Whether the field is edited through the media picker
    pub fn is_image(self) -> bool {
        matches!(self, Field::Image)
    }

    /// Reverse lookup from a storage subkey
    pub fn from_storage_subkey(subkey: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.storage_subkey() == subkey)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| crate::Error::Config(format!("Unknown field: {s}")))
    }
}

/// Ordered sequence of supported fields
pub fn list_fields() -> &'static [Field] {
    &Field::ALL
}

/// Key fragment a field's value is stored under
pub fn storage_subkey(field: Field) -> &'static str {
    field.storage_subkey()
}
