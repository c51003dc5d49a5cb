use std::sync::Arc;

use vidhub_media::MediaIngestor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is behind an `Arc` or is a pool handle.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vidhub_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Uploads staged files to object storage.
    pub media: Arc<MediaIngestor>,
}
