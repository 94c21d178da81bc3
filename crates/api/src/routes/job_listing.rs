//! Route definitions for the `/admin/job-listings` edit surface.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::job_listing;
use crate::state::AppState;

/// Routes mounted at `/admin/job-listings`.
///
/// ```text
/// GET  /{id}/edit          -> edit (lock-gated edit view)
/// PUT  /{id}               -> update (save, releases lock)
/// POST /{id}/refresh-lock  -> refresh_lock (heartbeat)
/// POST /{id}/release-lock  -> release_lock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/edit", get(job_listing::edit))
        .route("/{id}", put(job_listing::update))
        .route("/{id}/refresh-lock", post(job_listing::refresh_lock))
        .route("/{id}/release-lock", post(job_listing::release_lock))
}
