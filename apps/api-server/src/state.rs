//! Application state - shared across all handlers.

use std::sync::Arc;

use postbox_core::ports::PostStore;
use postbox_infra::{DatabaseConfig, MemoryPostStore};

#[cfg(feature = "postgres")]
use postbox_infra::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the appropriate store variant.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn PostStore> = {
            if let Some(config) = db_config {
                match postbox_infra::database::connect(config).await {
                    Ok(conn) => Arc::new(PostgresPostStore::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(MemoryPostStore::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(MemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn PostStore> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(MemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self { store }
    }

    /// State backed by the in-memory store, used by tests.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryPostStore::new()),
        }
    }
}
