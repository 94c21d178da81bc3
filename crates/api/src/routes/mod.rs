pub mod auth;
pub mod health;
pub mod job_listing;
pub mod law_firm;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                  login (public)
///
/// /admin/law-firms/{id}/edit                   edit view gate (staff)
/// /admin/law-firms/{id}                        save (staff, releases lock)
/// /admin/law-firms/{id}/refresh-lock           heartbeat (authenticated)
/// /admin/law-firms/{id}/release-lock           release (authenticated)
///
/// /admin/job-listings/{id}/edit                edit view gate (staff)
/// /admin/job-listings/{id}                     save (staff, releases lock)
/// /admin/job-listings/{id}/refresh-lock        heartbeat (authenticated)
/// /admin/job-listings/{id}/release-lock        release (authenticated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/law-firms", law_firm::router())
        .nest("/admin/job-listings", job_listing::router())
}
