//! Backend selected from configuration

use crate::{BackendConfig, InMemoryBackend, MetadataBackend, Result};
use async_trait::async_trait;
use tracing::info;

#[cfg(feature = "postgres-backend")]
use crate::PostgresBackend;

/// The backend named by a [`BackendConfig`]
#[derive(Debug, Clone)]
pub enum ConfiguredBackend {
    /// In-process maps
    InMemory(InMemoryBackend),

    #[cfg(feature = "postgres-backend")]
    /// PostgreSQL tables
    Postgres(PostgresBackend),
}

impl ConfiguredBackend {
    /// Build the backend a configuration describes
    pub async fn connect(config: &BackendConfig) -> Result<Self> {
        match config {
            BackendConfig::InMemory => {
                info!(backend = "inmemory", "Metadata backend ready");
                Ok(Self::InMemory(InMemoryBackend::new()))
            }
            #[cfg(feature = "postgres-backend")]
            BackendConfig::Postgres {
                url,
                pool_size,
                table_prefix,
            } => {
                let backend = PostgresBackend::new(url, *pool_size, table_prefix).await?;
                info!(backend = "postgres", %table_prefix, "Metadata backend ready");
                Ok(Self::Postgres(backend))
            }
        }
    }

    /// Backend kind, as written in configuration
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InMemory(_) => "inmemory",
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl MetadataBackend for ConfiguredBackend {
    async fn get_item_meta(&self, item_id: u64, key: &str) -> Result<Option<String>> {
        match self {
            Self::InMemory(b) => b.get_item_meta(item_id, key).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.get_item_meta(item_id, key).await,
        }
    }

    async fn set_item_meta(&self, item_id: u64, key: &str, value: &str) -> Result<()> {
        match self {
            Self::InMemory(b) => b.set_item_meta(item_id, key, value).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.set_item_meta(item_id, key, value).await,
        }
    }

    async fn get_option(&self, key: &str) -> Result<Option<String>> {
        match self {
            Self::InMemory(b) => b.get_option(key).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.get_option(key).await,
        }
    }

    async fn set_option(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::InMemory(b) => b.set_option(key, value).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.set_option(key, value).await,
        }
    }

    async fn delete_option(&self, key: &str) -> Result<()> {
        match self {
            Self::InMemory(b) => b.delete_option(key).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.delete_option(key).await,
        }
    }

    async fn health_check(&self, check_key: &str) -> Result<()> {
        match self {
            Self::InMemory(b) => b.health_check(check_key).await,
            #[cfg(feature = "postgres-backend")]
            Self::Postgres(b) => b.health_check(check_key).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_default_is_inmemory() {
        let backend = ConfiguredBackend::connect(&BackendConfig::default())
            .await
            .unwrap();

        assert_eq!(backend.kind(), "inmemory");

        backend.set_item_meta(3, "k", "v").await.unwrap();
        backend.set_option("o", "w").await.unwrap();
        assert_eq!(
            backend.get_item_meta(3, "k").await.unwrap(),
            Some("v".to_string())
        );
        assert_eq!(backend.get_option("o").await.unwrap(), Some("w".to_string()));

        backend.delete_option("o").await.unwrap();
        assert_eq!(backend.get_option("o").await.unwrap(), None);
        assert!(backend.health_check("ns-health").await.is_ok());
    }

    #[cfg(feature = "postgres-backend")]
    #[tokio::test]
    async fn test_connect_postgres_rejects_bad_prefix() {
        let config = BackendConfig::Postgres {
            url: "postgresql://localhost/none".to_string(),
            pool_size: 1,
            table_prefix: "bad;prefix".to_string(),
        };

        assert!(ConfiguredBackend::connect(&config).await.is_err());
    }
}
