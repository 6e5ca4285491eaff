//! Application state - shared across all handlers.

use std::sync::Arc;

use corkboard_core::ports::{PostRepository, SecretScheme};
use corkboard_infra::{InMemoryPostRepository, PlaintextSecret};

#[cfg(feature = "hashing")]
use corkboard_infra::Argon2Secret;
#[cfg(feature = "postgres")]
use corkboard_infra::database::DatabaseConnections;
#[cfg(feature = "postgres")]
use corkboard_infra::database::PostgresPostRepository;

use crate::config::AppConfig;

/// Shared application state with dependency-injected adapters.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub secrets: Arc<dyn SecretScheme>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = match &config.database {
            Some(db_config) => match DatabaseConnections::init(db_config).await {
                Ok(db) => Arc::new(PostgresPostRepository::new(db.main)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory store.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!(
                    "DATABASE_URL not set. Posts are kept in memory and lost on restart."
                );
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            tracing::info!("Built without the postgres feature - posts are kept in memory.");
            Arc::new(InMemoryPostRepository::new())
        };

        let secrets = Self::secret_scheme(&config.secret_scheme);

        tracing::info!("Application state initialized");

        Self { posts, secrets }
    }

    fn secret_scheme(name: &str) -> Arc<dyn SecretScheme> {
        match name {
            #[cfg(feature = "hashing")]
            "argon2" => {
                tracing::info!("Post passwords are hashed with Argon2id");
                Arc::new(Argon2Secret::new())
            }
            "plaintext" => {
                tracing::warn!(
                    "Post passwords are stored in plaintext; set SECRET_SCHEME=argon2 to hash new secrets"
                );
                Arc::new(PlaintextSecret)
            }
            other => {
                tracing::warn!(
                    "Unknown SECRET_SCHEME '{}', falling back to plaintext storage",
                    other
                );
                Arc::new(PlaintextSecret)
            }
        }
    }
}
