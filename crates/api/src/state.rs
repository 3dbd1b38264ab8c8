use std::sync::Arc;

use taskboard_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store backend (Postgres or in-memory).
    pub store: SharedStore,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
