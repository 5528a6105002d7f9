use std::sync::Arc;

use crate::auth::password::Hasher;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atrium_db::DbPool,
    /// Server configuration (bind address, CORS, token settings).
    pub config: Arc<ServerConfig>,
    /// Password hasher built from the configured Argon2id parameters.
    pub hasher: Arc<Hasher>,
}

impl AppState {
    /// Build the application state from a pool and configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configured hashing parameters are rejected by the
    /// argon2 crate, which is a startup misconfiguration.
    pub fn new(pool: atrium_db::DbPool, config: ServerConfig) -> Self {
        let hasher = Hasher::new(&config.hashing)
            .unwrap_or_else(|e| panic!("Invalid Argon2 parameters: {e}"));
        Self {
            pool,
            config: Arc::new(config),
            hasher: Arc::new(hasher),
        }
    }
}
