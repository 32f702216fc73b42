//! Configuration loading

use crate::{Config, ConfigFormat};
use regex::Regex;
use sharemeta_core::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Load configuration from a file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Failed to read config file: {e}")))?;

    let format = ConfigFormat::from_path(path)?;

    load_from_str(&content, format)
}

/// Expand environment variables in configuration string
/// Supports syntax: ${VAR} and ${VAR:-default}
fn expand_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(:-([^}]*))?\}")
        .map_err(|e| Error::Config(format!("Invalid regex: {e}")))?;

    let mut result = String::with_capacity(content.len());
    let mut last_match = 0;

    for cap in re.captures_iter(content) {
        let (Some(full_match), Some(var_name)) = (cap.get(0), cap.get(1)) else {
            continue;
        };
        let var_name = var_name.as_str();
        let default_value = cap.get(3).map(|m| m.as_str());

        let value = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => match default_value {
                Some(default) => default.to_string(),
                None => {
                    return Err(Error::Config(format!(
                        "Environment variable '{var_name}' not set and no default provided"
                    )));
                }
            },
        };

        result.push_str(&content[last_match..full_match.start()]);
        result.push_str(&value);
        last_match = full_match.end();
    }

    result.push_str(&content[last_match..]);

    Ok(result)
}

/// Load configuration from a string
pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<Config> {
    let expanded_content = expand_env_vars(content)?;

    let config = match format {
        ConfigFormat::Yaml => serde_yaml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse YAML: {e}")))?,
        ConfigFormat::Toml => toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {e}")))?,
        ConfigFormat::Json => serde_json::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse JSON: {e}")))?,
    };

    Ok(config)
}

/// Load and validate configuration from a file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let config = load_from_file(path)?;

    crate::validator::validate_config(&config)?;

    tracing::info!(
        path = %path.display(),
        namespace = %config.plugin.namespace,
        "Configuration loaded"
    );

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML_CONFIG: &str = r#"
plugin:
  namespace: "ogmeta"
  post_types: ["post", "page", "product"]
  min_image_px: 600

settings:
  capability: "edit_theme_options"

store:
  backend:
    type: inmemory

logging:
  level: "debug"
  format: "json"
"#;

    #[test]
    fn test_load_yaml() {
        let config = load_from_str(YAML_CONFIG, ConfigFormat::Yaml).unwrap();

        assert_eq!(config.plugin.namespace.as_str(), "ogmeta");
        assert_eq!(config.plugin.post_types.len(), 3);
        assert_eq!(config.plugin.min_image_px, 600);
        assert_eq!(config.plugin.meta_box_title, "Facebook Sharing Options");
        assert_eq!(config.settings.capability, "edit_theme_options");
        assert_eq!(config.logging.format, crate::LogFormat::Json);
    }

    #[test]
    fn test_load_toml() {
        let toml_config = r#"
[plugin]
namespace = "og"
meta_box_title = "Sharing"
"#;

        let config = load_from_str(toml_config, ConfigFormat::Toml).unwrap();
        assert_eq!(config.plugin.namespace.as_str(), "og");
        assert_eq!(config.plugin.meta_box_title, "Sharing");
        assert_eq!(config.plugin.post_types, vec!["post", "page"]);
    }

    #[test]
    fn test_invalid_yaml() {
        let invalid = "invalid: [yaml";
        let result = load_from_str(invalid, ConfigFormat::Yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_namespace_rejected_at_parse() {
        let result = load_from_str(r#"{"plugin": {"namespace": "face-book"}}"#, ConfigFormat::Json);
        assert!(result.is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        env::set_var("SHAREMETA_TEST_NS", "envns");

        let config = load_from_str(
            "plugin:\n  namespace: \"${SHAREMETA_TEST_NS}\"\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.plugin.namespace.as_str(), "envns");

        env::remove_var("SHAREMETA_TEST_NS");
    }

    #[test]
    fn test_env_var_with_default() {
        env::remove_var("SHAREMETA_UNDEFINED_VAR");

        let config = load_from_str(
            "settings:\n  capability: \"${SHAREMETA_UNDEFINED_VAR:-manage_network}\"\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.settings.capability, "manage_network");
    }

    #[test]
    fn test_missing_env_var_no_default() {
        env::remove_var("SHAREMETA_MISSING_VAR");

        let result = load_from_str(
            "plugin:\n  namespace: \"${SHAREMETA_MISSING_VAR}\"\n",
            ConfigFormat::Yaml,
        );
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("SHAREMETA_MISSING_VAR"));
    }

    #[test]
    fn test_multiple_env_vars() {
        env::set_var("SHAREMETA_DB_HOST", "localhost");
        env::set_var("SHAREMETA_DB_PORT", "5432");

        let expanded =
            expand_env_vars("postgres://${SHAREMETA_DB_HOST}:${SHAREMETA_DB_PORT}/cms").unwrap();
        assert_eq!(expanded, "postgres://localhost:5432/cms");

        env::remove_var("SHAREMETA_DB_HOST");
        env::remove_var("SHAREMETA_DB_PORT");
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML_CONFIG.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.plugin.namespace.as_str(), "ogmeta");
    }

    #[test]
    fn test_load_config_validates() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"plugin": {"post_types": []}}"#).unwrap();

        assert!(load_config(file.path()).is_err());
    }
}
