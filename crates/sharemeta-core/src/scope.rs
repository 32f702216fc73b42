//! Entity scopes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a content item
pub type ItemId = u64;

/// Where a value lives: on one content item, or site-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "scope", content = "id", rename_all = "lowercase")]
pub enum Scope {
    /// Metadata attached to a single content item
    Item(ItemId),
    /// Global defaults stored as site options
    Defaults,
}

impl Scope {
    /// Key sub-namespace for the scope
    pub fn subnamespace(self) -> &'static str {
        match self {
            Scope::Item(_) => "postmeta",
            Scope::Defaults => "postmeta-default",
        }
    }

    /// Item id, if this is an item scope
    pub fn item_id(self) -> Option<ItemId> {
        match self {
            Scope::Item(id) => Some(id),
            Scope::Defaults => None,
        }
    }

    /// Whether this is the defaults scope
    pub fn is_defaults(self) -> bool {
        matches!(self, Scope::Defaults)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Item(id) => write!(f, "item:{id}"),
            Scope::Defaults => write!(f, "defaults"),
        }
    }
}
