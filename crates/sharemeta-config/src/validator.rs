//! Configuration validation

use crate::Config;
use sharemeta_core::{Error, Result};

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_plugin(config)?;
    validate_settings(config)?;
    validate_logging(config)?;

    Ok(())
}

fn validate_plugin(config: &Config) -> Result<()> {
    let plugin = &config.plugin;

    if plugin.post_types.is_empty() {
        return Err(Error::Config("post_types cannot be empty".to_string()));
    }

    if plugin.post_types.iter().any(|t| t.trim().is_empty()) {
        return Err(Error::Config("post type names cannot be empty".to_string()));
    }

    if plugin.min_image_px == 0 {
        return Err(Error::Config("min_image_px must be > 0".to_string()));
    }

    if plugin.meta_box_title.trim().is_empty() {
        tracing::warn!("meta_box_title is empty; the form section will have no heading");
    }

    Ok(())
}

fn validate_settings(config: &Config) -> Result<()> {
    let settings = &config.settings;

    if settings.capability.is_empty() {
        return Err(Error::Config("settings capability cannot be empty".to_string()));
    }

    if settings.page_slug.is_empty() {
        return Err(Error::Config("settings page_slug cannot be empty".to_string()));
    }

    if settings.option_group.is_empty() {
        return Err(Error::Config("settings option_group cannot be empty".to_string()));
    }

    Ok(())
}

fn validate_logging(config: &Config) -> Result<()> {
    match config.logging.level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        other => Err(Error::Config(format!(
            "Invalid log level: {other} (must be trace, debug, info, warn or error)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_post_types() {
        let mut config = Config::default();
        config.plugin.post_types.clear();

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("post_types"));
    }

    #[test]
    fn test_zero_min_image_px() {
        let mut config = Config::default();
        config.plugin.min_image_px = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_capability() {
        let mut config = Config::default();
        config.settings.capability = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(validate_config(&config).is_err());
    }
}
