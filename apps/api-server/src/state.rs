//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::PostService;
use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use quill_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build the application state, preferring Postgres when it is configured and reachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo = Self::post_repository(db_config).await;

        tracing::info!("Application state initialized");

        Self {
            posts: PostService::new(repo),
        }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            posts: PostService::new(Arc::new(InMemoryPostRepository::new())),
        }
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match quill_infra::database::connect(config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(_db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
