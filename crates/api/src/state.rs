use std::sync::Arc;

use lexhire_core::clock::Clock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lexhire_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Wall-clock source for edit-lock expiry. Production installs
    /// `SystemClock`; integration tests install a manual clock and
    /// time-travel across the lock TTL.
    pub clock: Arc<dyn Clock>,
}
