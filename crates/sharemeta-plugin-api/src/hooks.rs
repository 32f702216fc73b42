//! Hook descriptors
//!
//! A plugin lists the hook points it wants; registering and dispatching them
//! is the host's job.

use serde::{Deserialize, Serialize};

/// A hook point the host dispatches to a plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hook", rename_all = "snake_case")]
pub enum Hook {
    /// Admin form section on the edit screen of a content type
    MetaBox {
        /// Section id
        id: String,
        /// Section heading
        title: String,
        /// Content type the section is attached to
        post_type: String,
    },

    /// Submenu settings page
    SettingsPage {
        /// Parent menu
        parent: String,
        /// Page slug
        slug: String,
        /// Page title
        page_title: String,
        /// Menu label
        menu_title: String,
        /// Capability required to open the page
        capability: String,
    },

    /// Content item saved with submitted form data
    SaveItem,

    /// Public page head being rendered
    Head,

    /// Admin screens enqueueing scripts and styles
    AdminAssets {
        /// Bundles to enqueue
        bundles: Vec<AssetBundle>,
    },
}

impl Hook {
    /// Host hook point name
    pub fn point(&self) -> &'static str {
        match self {
            Hook::MetaBox { .. } => "meta_box",
            Hook::SettingsPage { .. } => "settings_page",
            Hook::SaveItem => "save_item",
            Hook::Head => "head",
            Hook::AdminAssets { .. } => "admin_assets",
        }
    }
}

/// Script or stylesheet served by the plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBundle {
    /// Unique handle
    pub handle: String,

    /// Script or style
    pub kind: AssetKind,

    /// Path relative to the plugin directory
    pub src: String,

    /// Handles this bundle must load after
    #[serde(default)]
    pub deps: Vec<String>,
}

/// Asset type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// JavaScript
    Script,
    /// CSS
    Style,
}
