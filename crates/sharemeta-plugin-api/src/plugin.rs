//! Plugin contract between the host platform and an extension

use crate::error::Result;
use crate::hooks::Hook;
use async_trait::async_trait;
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An extension the host loads, configures and dispatches hooks to
///
/// The host calls [`init`](Plugin::init) with the plugin's configuration
/// section, then [`start`](Plugin::start) once every plugin is initialized.
/// Only the hooks returned by [`hooks`](Plugin::hooks) are dispatched.
#[async_trait]
pub trait Plugin: Send + Sync + fmt::Debug {
    /// Unique name the host registers the plugin under
    fn name(&self) -> &str;

    /// Semver version string
    fn version(&self) -> &str;

    /// One-line summary shown in the host's plugin list
    fn description(&self) -> &str {
        ""
    }

    /// Author credit
    fn author(&self) -> &str {
        "Unknown"
    }

    /// Project page
    fn homepage(&self) -> Option<&str> {
        None
    }

    /// Host modules that must be present
    fn dependencies(&self) -> Vec<PluginDependency> {
        Vec::new()
    }

    /// Extension points the plugin attaches to
    fn hooks(&self) -> Vec<Hook> {
        Vec::new()
    }

    /// Apply the plugin's configuration section
    async fn init(&mut self, config: serde_json::Value) -> Result<()>;

    /// Begin serving hooks
    async fn start(&mut self) -> Result<()>;

    /// Stop serving hooks
    async fn stop(&mut self) -> Result<()>;

    /// Whether the plugin can currently serve its hooks
    async fn health_check(&self) -> Result<HealthStatus> {
        Ok(HealthStatus::Healthy)
    }

    /// Static description of the plugin, as the host lists it
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            name: self.name().to_string(),
            version: self.version().to_string(),
            description: self.description().to_string(),
            author: self.author().to_string(),
            homepage: self.homepage().map(String::from),
            dependencies: self.dependencies(),
            hooks: self.hooks(),
        }
    }
}

/// A host module the plugin needs, with the versions it works against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDependency {
    /// Host module name
    pub name: String,

    /// Semver requirement, e.g. `^3.5` or `*`
    pub version_req: String,
}

impl PluginDependency {
    /// Dependency on `name` matching `version_req`
    pub fn required(name: impl Into<String>, version_req: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version_req: version_req.into(),
        }
    }

    /// Whether the host module at `version` is acceptable
    ///
    /// Unparseable requirements or versions never match.
    pub fn satisfies(&self, version: &str) -> bool {
        match (VersionReq::parse(&self.version_req), Version::parse(version)) {
            (Ok(req), Ok(ver)) => req.matches(&ver),
            _ => false,
        }
    }
}

/// Result of a health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message")]
pub enum HealthStatus {
    /// Hooks can be served
    Healthy,

    /// Hooks would fail; carries the cause
    Unhealthy(String),
}

impl HealthStatus {
    /// Check if the plugin is healthy
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    /// Cause of an unhealthy status
    pub fn message(&self) -> Option<&str> {
        match self {
            HealthStatus::Healthy => None,
            HealthStatus::Unhealthy(msg) => Some(msg),
        }
    }
}

/// What the host lists about a plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginMetadata {
    /// Registered name
    pub name: String,

    /// Version string
    pub version: String,

    /// Summary line
    pub description: String,

    /// Author credit
    pub author: String,

    /// Project page
    pub homepage: Option<String>,

    /// Required host modules
    pub dependencies: Vec<PluginDependency>,

    /// Declared extension points
    pub hooks: Vec<Hook>,
}

/// Metadata plus lifecycle state and last health result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Static description
    #[serde(flatten)]
    pub metadata: PluginMetadata,

    /// Lifecycle state
    pub state: PluginState,

    /// Health at the time the info was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<HealthStatus>,
}

/// Where a plugin is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginState {
    /// Constructed, configuration not applied yet
    Loaded,

    /// Configuration applied
    Initialized,

    /// Serving hooks
    Started,

    /// No longer serving hooks
    Stopped,

    /// Configuration was rejected; carries the reason
    Failed(String),
}

impl PluginState {
    /// Whether hooks are being served
    pub fn is_started(&self) -> bool {
        matches!(self, PluginState::Started)
    }

    /// Whether the last configuration attempt was rejected
    pub fn is_failed(&self) -> bool {
        matches!(self, PluginState::Failed(_))
    }
}

impl fmt::Display for PluginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginState::Loaded => f.write_str("loaded"),
            PluginState::Initialized => f.write_str("initialized"),
            PluginState::Started => f.write_str("started"),
            PluginState::Stopped => f.write_str("stopped"),
            PluginState::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
