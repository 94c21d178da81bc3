//! Route definitions for the `/admin/law-firms` edit surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::law_firm;
use crate::state::AppState;

/// Routes mounted at `/admin/law-firms`.
///
/// ```text
/// GET  /{id}/edit          -> edit (lock-gated edit view)
/// PUT  /{id}               -> update (save, releases lock)
/// POST /{id}/refresh-lock  -> refresh_lock (heartbeat)
/// POST /{id}/release-lock  -> release_lock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/edit", get(law_firm::edit))
        .route("/{id}", put(law_firm::update))
        .route("/{id}/refresh-lock", post(law_firm::refresh_lock))
        .route("/{id}/release-lock", post(law_firm::release_lock))
}
