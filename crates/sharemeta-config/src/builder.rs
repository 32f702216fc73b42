//! Configuration builder

use crate::types::{Config, LoggingConfig, PluginConfig, SettingsConfig};
use sharemeta_core::{Namespace, Result};
use sharemeta_store::StoreConfig;

/// Builder for constructing configuration programmatically
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set plugin configuration
    pub fn plugin(mut self, plugin: PluginConfig) -> Self {
        self.config.plugin = plugin;
        self
    }

    /// Set the namespace
    pub fn namespace(mut self, namespace: Namespace) -> Self {
        self.config.plugin.namespace = namespace;
        self
    }

    /// Add a content type that gets the metadata form section
    pub fn add_post_type(mut self, post_type: impl Into<String>) -> Self {
        let post_type = post_type.into();
        if !self.config.plugin.post_types.contains(&post_type) {
            self.config.plugin.post_types.push(post_type);
        }
        self
    }

    /// Set settings page configuration
    pub fn settings(mut self, settings: SettingsConfig) -> Self {
        self.config.settings = settings;
        self
    }

    /// Set the capability required for the settings page
    pub fn capability(mut self, capability: impl Into<String>) -> Self {
        self.config.settings.capability = capability.into();
        self
    }

    /// Set store configuration
    pub fn store(mut self, store: StoreConfig) -> Self {
        self.config.store = store;
        self
    }

    /// Set logging configuration
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<Config> {
        crate::validator::validate_config(&self.config)?;
        Ok(self.config)
    }
}
