//! Admin assets and media picker wiring
//!
//! `admin.js` exposes a single `sharemetaMediaPicker(config)` entry point.
//! The edit screen binds it to every image button by class, the defaults
//! page to its one button by id.

use serde::{Deserialize, Serialize};
use sharemeta_core::{FieldKeys, Result};
use sharemeta_plugin_api::{AssetBundle, AssetKind};

/// Admin script source
pub const ADMIN_JS: &str = include_str!("../assets/admin.js");

/// Admin stylesheet source
pub const ADMIN_CSS: &str = include_str!("../assets/admin.css");

/// How the picker finds the buttons it is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SelectorStrategy {
    /// Every element carrying a class
    Class(String),
    /// A single element by id
    Id(String),
}

/// Options passed to `sharemetaMediaPicker`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaPickerConfig {
    /// Buttons to bind
    pub selector: SelectorStrategy,

    /// Picker dialog title
    pub title: String,

    /// Picker confirm button label
    pub button_text: String,

    /// Appended to the clicked button's id to find the input receiving the URL
    pub target_suffix: String,
}

impl MediaPickerConfig {
    /// Picker bound to a selector, with the stock labels
    pub fn new(selector: SelectorStrategy) -> Self {
        Self {
            selector,
            title: "Choose Image".to_string(),
            button_text: "Choose Image".to_string(),
            target_suffix: "_url".to_string(),
        }
    }

    /// Picker for every image button on an edit screen
    pub fn for_class(keys: &FieldKeys) -> Self {
        Self::new(SelectorStrategy::Class(keys.image_button_class()))
    }

    /// Picker for a single button
    pub fn for_id(id: impl Into<String>) -> Self {
        Self::new(SelectorStrategy::Id(id.into()))
    }

    /// Inline `<script>` that binds the picker
    pub fn init_script(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;

        Ok(format!(
            "<script>sharemetaMediaPicker({});</script>",
            json.replace("</", "<\\/")
        ))
    }
}

/// Script and style bundles the admin screens need
pub fn bundles(keys: &FieldKeys) -> Vec<AssetBundle> {
    let ns = keys.namespace();

    vec![
        AssetBundle {
            handle: format!("{ns}-admin-js"),
            kind: AssetKind::Script,
            src: "assets/admin.js".to_string(),
            deps: vec!["jquery".to_string(), "media".to_string()],
        },
        AssetBundle {
            handle: format!("{ns}-admin-css"),
            kind: AssetKind::Style,
            src: "assets/admin.css".to_string(),
            deps: vec![],
        },
    ]
}
