#![allow(dead_code)] // each test binary uses a different subset of helpers

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use lexhire_api::auth::jwt::{generate_access_token, JwtConfig};
use lexhire_api::auth::password::hash_password;
use lexhire_api::config::ServerConfig;
use lexhire_api::router::build_app_router;
use lexhire_api::state::AppState;
use lexhire_core::clock::ManualClock;
use lexhire_core::types::Timestamp;
use lexhire_db::models::job_listing::CreateJobListing;
use lexhire_db::models::law_firm::CreateLawFirm;
use lexhire_db::models::user::{CreateUser, User};
use lexhire_db::repositories::{JobListingRepo, LawFirmRepo, UserRepo};

/// Fixed instant the test clock starts at.
pub fn start_time() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers plus a
/// manual clock, so tests can time-travel across the lock TTL.
///
/// This goes through the same [`build_app_router`] that production uses.
pub fn build_test_app(pool: PgPool) -> (Router, Arc<ManualClock>) {
    let config = test_config();
    let clock = Arc::new(ManualClock::new(start_time()));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        clock: clock.clone(),
    };

    (build_app_router(state, &config), clock)
}

/// Create a back-office user directly in the database.
pub async fn seed_user(pool: &PgPool, name: &str, email: &str, role: &str) -> User {
    let hashed = hash_password("test_password_123!").expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hashed,
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Mint a valid access token for a seeded user.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.role, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create a law firm directly in the database, returning its id.
pub async fn seed_law_firm(pool: &PgPool, slug: &str) -> i64 {
    LawFirmRepo::create(
        pool,
        &CreateLawFirm {
            name: "Harlan & Vance LLP".to_string(),
            slug: slug.to_string(),
            description: Some("Corporate litigation".to_string()),
            website: None,
            city: Some("Rotterdam".to_string()),
        },
    )
    .await
    .expect("firm creation should succeed")
    .id
}

/// Create a job listing (and its parent firm) directly in the database,
/// returning the listing id.
pub async fn seed_job_listing(pool: &PgPool, slug: &str) -> i64 {
    let firm_id = seed_law_firm(pool, &format!("{slug}-firm")).await;
    JobListingRepo::create(
        pool,
        &CreateJobListing {
            law_firm_id: firm_id,
            title: "Senior Associate, M&A".to_string(),
            slug: slug.to_string(),
            description: None,
            location: Some("Rotterdam".to_string()),
            employment_type: Some("full-time".to_string()),
        },
    )
    .await
    .expect("listing creation should succeed")
    .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request without authentication.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a Bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON POST request without authentication.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an empty-bodied POST request with a Bearer token.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON PUT request with a Bearer token.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
