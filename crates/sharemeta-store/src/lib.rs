//! # Sharemeta Store
//!
//! Persistence for sharing metadata.
//!
//! The host platform provides two primitives: per-item metadata keyed by
//! item id and key, and global options keyed by key. [`MetadataBackend`]
//! abstracts over them and [`MetadataStore`] layers the plugin's key naming
//! on top.
//!
//! ## Backends
//!
//! - **InMemory**: Fast, zero dependencies, single-instance only (default)
//! - **PostgreSQL**: Durable tables for item metadata and options
//!
//! [`ConfiguredBackend::connect`] builds whichever one a [`BackendConfig`] names.
//!
//! ## Example
//!
//! ```rust
//! use sharemeta_core::{FieldKeys, Scope};
//! use sharemeta_store::{InMemoryBackend, MetadataStore};
//!
//! #[tokio::main]
//! async fn main() -> sharemeta_store::Result<()> {
//!     let store = MetadataStore::new(InMemoryBackend::new(), FieldKeys::default());
//!
//!     store.set(Scope::Item(42), "title", "Hello").await?;
//!     assert_eq!(store.get(Scope::Item(42), "title").await?, "Hello");
//!
//!     // Absent values read as empty strings
//!     assert_eq!(store.get(Scope::Defaults, "title").await?, "");
//!
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

mod backend;
mod config;
mod configured;
mod error;
mod inmemory;
mod store;

#[cfg(feature = "postgres-backend")]
mod postgres_backend;

pub use backend::MetadataBackend;
pub use config::{BackendConfig, StoreConfig};
pub use configured::ConfiguredBackend;
pub use error::{Error, Result};
pub use inmemory::InMemoryBackend;
pub use store::MetadataStore;

#[cfg(feature = "postgres-backend")]
pub use postgres_backend::PostgresBackend;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::backend::MetadataBackend;
    pub use crate::config::{BackendConfig, StoreConfig};
    pub use crate::configured::ConfiguredBackend;
    pub use crate::error::{Error, Result};
    pub use crate::inmemory::InMemoryBackend;
    pub use crate::store::MetadataStore;

    #[cfg(feature = "postgres-backend")]
    pub use crate::postgres_backend::PostgresBackend;
}
