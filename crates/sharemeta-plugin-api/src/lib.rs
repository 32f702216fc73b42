//! # Sharemeta Plugin API
//!
//! The contract between a content-management host and the plugins it runs.
//!
//! - **Lifecycle**: [`Plugin`] (init, start, stop, health)
//! - **Hooks**: [`Hook`] descriptors a plugin declares; the host dispatches
//! - **Context**: the acting [`User`] and the [`PageContext`] being rendered
//! - **Forms**: [`SubmittedForm`], the ordered key/value pairs of a save
//! - **Options whitelist**: [`OptionsWhitelist`], the host's record of which
//!   option names a settings page may write
//!
//! ## Example
//!
//! ```rust,no_run
//! use sharemeta_plugin_api::*;
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! struct MyPlugin;
//!
//! #[async_trait]
//! impl Plugin for MyPlugin {
//!     fn name(&self) -> &str { "my-plugin" }
//!     fn version(&self) -> &str { "1.0.0" }
//!
//!     async fn init(&mut self, config: serde_json::Value) -> Result<(), PluginError> {
//!         Ok(())
//!     }
//!
//!     async fn start(&mut self) -> Result<(), PluginError> {
//!         Ok(())
//!     }
//!
//!     async fn stop(&mut self) -> Result<(), PluginError> {
//!         Ok(())
//!     }
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod context;
pub mod error;
pub mod form;
pub mod hooks;
pub mod plugin;
pub mod settings;

// Re-export commonly used types
pub use context::{PageContext, PageKind, User};
pub use error::PluginError;
pub use form::SubmittedForm;
pub use hooks::{AssetBundle, AssetKind, Hook};
pub use plugin::{HealthStatus, Plugin, PluginDependency, PluginInfo, PluginMetadata, PluginState};
pub use settings::OptionsWhitelist;

/// Prelude module with commonly used types
pub mod prelude {
    pub use crate::context::{PageContext, PageKind, User};
    pub use crate::error::PluginError;
    pub use crate::form::SubmittedForm;
    pub use crate::hooks::{AssetBundle, AssetKind, Hook};
    pub use crate::plugin::{HealthStatus, Plugin, PluginDependency};
    pub use crate::settings::OptionsWhitelist;
    pub use async_trait::async_trait;
}
