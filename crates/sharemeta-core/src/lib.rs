//! # Sharemeta Core
//!
//! Core types and error handling for the sharing-metadata plugin.
//!
//! This crate owns the pieces every other crate consults:
//! - The field registry (`title`, `image`, `description`)
//! - Entity scopes (a single content item or the site-wide defaults)
//! - The key naming scheme shared by form identifiers and storage keys
//! - Markup escaping
//! - Error types

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod escape;
pub mod field;
pub mod keys;
pub mod scope;

pub use error::{Error, Result};
pub use field::{list_fields, storage_subkey, Field};
pub use keys::{FieldKeys, Namespace, DEFAULT_NAMESPACE};
pub use scope::{ItemId, Scope};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::{list_fields, storage_subkey, Field};
    pub use crate::keys::{FieldKeys, Namespace};
    pub use crate::scope::{ItemId, Scope};
}
