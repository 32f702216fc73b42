//! Configuration types

use serde::{Deserialize, Serialize};
use sharemeta_core::Namespace;
use sharemeta_store::StoreConfig;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Plugin behaviour
    #[serde(default)]
    pub plugin: PluginConfig,

    /// Defaults settings page
    #[serde(default)]
    pub settings: SettingsConfig,

    /// Persistence backend
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PluginConfig {
    /// Namespace prefixed to every identifier and storage key
    #[serde(default)]
    pub namespace: Namespace,

    /// Content types that get the metadata form section
    #[serde(default = "default_post_types")]
    pub post_types: Vec<String>,

    /// Title of the metadata form section
    #[serde(default = "default_meta_box_title")]
    pub meta_box_title: String,

    /// Minimum image edge (pixels) mentioned next to the image picker
    #[serde(default = "default_min_image_px")]
    pub min_image_px: u32,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            namespace: Namespace::default(),
            post_types: default_post_types(),
            meta_box_title: default_meta_box_title(),
            min_image_px: default_min_image_px(),
        }
    }
}

fn default_post_types() -> Vec<String> {
    vec!["post".to_string(), "page".to_string()]
}

fn default_meta_box_title() -> String {
    "Facebook Sharing Options".to_string()
}

fn default_min_image_px() -> u32 {
    200
}

/// Settings page configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SettingsConfig {
    /// Menu slug of the page
    #[serde(default = "default_page_slug")]
    pub page_slug: String,

    /// Page heading and browser title
    #[serde(default = "default_page_title")]
    pub page_title: String,

    /// Submenu label
    #[serde(default = "default_menu_title")]
    pub menu_title: String,

    /// Parent menu the page is attached to
    #[serde(default = "default_parent_menu")]
    pub parent_menu: String,

    /// Capability required to view and save the page
    #[serde(default = "default_capability")]
    pub capability: String,

    /// Options group the default identifiers are whitelisted under
    #[serde(default = "default_option_group")]
    pub option_group: String,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            page_slug: default_page_slug(),
            page_title: default_page_title(),
            menu_title: default_menu_title(),
            parent_menu: default_parent_menu(),
            capability: default_capability(),
            option_group: default_option_group(),
        }
    }
}

fn default_page_slug() -> String {
    "facebookmetadata-defaults".to_string()
}

fn default_page_title() -> String {
    "Facebook Metadata Defaults".to_string()
}

fn default_menu_title() -> String {
    "Facebook Metadata".to_string()
}

fn default_parent_menu() -> String {
    "options-general.php".to_string()
}

fn default_capability() -> String {
    "manage_options".to_string()
}

fn default_option_group() -> String {
    "facebookmetadata-defaults".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
