//! # Facebook Metadata
//!
//! Lets editors set an explicit title, image and description for sharing a
//! post or page, with site-wide defaults on a settings page.
//!
//! - [`FormRenderer`] renders the editable fields for an item or the defaults
//! - [`SubmissionHandler`] stores an item's fields when it is saved
//! - [`HeadEmitter`] emits `og:*` meta tags on single-item pages
//! - [`DefaultsPage`] is the capability-gated settings page
//! - [`SharingMetadataPlugin`] ties them to the host's hooks
//!
//! ## Example
//!
//! ```rust
//! use sharemeta_plugin::SharingMetadataPlugin;
//! use sharemeta_plugin_api::{PageContext, SubmittedForm};
//! use sharemeta_store::InMemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> sharemeta_core::Result<()> {
//!     let plugin = SharingMetadataPlugin::new(InMemoryBackend::new());
//!
//!     let form = SubmittedForm::from_urlencoded("facebookmetadata-postmeta-title=Hello");
//!     plugin.save_item(42, &form).await?;
//!
//!     let head = plugin.render_head(&PageContext::single(42)).await?;
//!     assert_eq!(head, r#"<meta property="og:title" content="Hello"/>"#);
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod assets;
pub mod form;
pub mod head;
pub mod plugin;
pub mod settings;
pub mod submission;
pub mod telemetry;

pub use assets::{MediaPickerConfig, SelectorStrategy};
pub use form::{FormRenderer, RenderedForm};
pub use head::{HeadEmitter, MetaTag};
pub use plugin::SharingMetadataPlugin;
pub use settings::DefaultsPage;
pub use submission::SubmissionHandler;

/// Custom Askama filters
pub mod filters {
    use sharemeta_core::escape;
    use std::fmt::Display;

    /// Escape a value for a double-quoted attribute
    pub fn attr<T: Display>(value: T) -> askama::Result<String> {
        Ok(escape::attr(&value.to_string()).into_owned())
    }

    /// Escape a value for text content
    pub fn text<T: Display>(value: T) -> askama::Result<String> {
        Ok(escape::text(&value.to_string()).into_owned())
    }
}
