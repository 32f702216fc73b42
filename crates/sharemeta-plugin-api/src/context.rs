//! Request context types

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The acting user of an admin request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: u64,

    /// Capabilities granted to the user
    #[serde(default)]
    pub capabilities: HashSet<String>,
}

impl User {
    /// Create a user without capabilities
    pub fn new(id: u64) -> Self {
        Self {
            id,
            capabilities: HashSet::new(),
        }
    }

    /// Grant a capability
    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.insert(capability.into());
        self
    }

    /// Check if the user holds a capability
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }
}

/// What kind of page is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// A single post
    Single,
    /// A single static page
    Page,
    /// A listing of items (category, tag, date, author)
    Archive,
    /// The front page listing
    Home,
    /// Search results
    Search,
    /// Not found
    NotFound,
}

impl PageKind {
    /// Whether the page shows exactly one content item
    pub fn is_single_item(self) -> bool {
        matches!(self, PageKind::Single | PageKind::Page)
    }
}

/// Page being rendered on the public side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    /// Page kind
    pub kind: PageKind,

    /// Queried item, if any
    pub item_id: Option<u64>,
}

impl PageContext {
    /// A single post page
    pub fn single(item_id: u64) -> Self {
        Self {
            kind: PageKind::Single,
            item_id: Some(item_id),
        }
    }

    /// A static page
    pub fn page(item_id: u64) -> Self {
        Self {
            kind: PageKind::Page,
            item_id: Some(item_id),
        }
    }

    /// A listing page without a single queried item
    pub fn listing(kind: PageKind) -> Self {
        Self {
            kind,
            item_id: None,
        }
    }

    /// The item shown, only when the page shows exactly one item
    pub fn single_item(&self) -> Option<u64> {
        if self.kind.is_single_item() {
            self.item_id
        } else {
            None
        }
    }
}
