//! HTTP-level integration tests for the law-firm edit-lock surface.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router
//! without a TCP listener, and the manual test clock to time-travel across
//! the 15-minute lock TTL without sleeping.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{body_json, get_auth, post_auth, put_json_auth};
use sqlx::PgPool;

use lexhire_core::roles::{ROLE_ADMIN, ROLE_EDITOR};
use lexhire_db::repositories::LawFirmRepo;

async fn lock_columns(pool: &PgPool, id: i64) -> (Option<i64>, Option<chrono::DateTime<chrono::Utc>>) {
    let firm = LawFirmRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .expect("firm must exist");
    (firm.locked_by, firm.locked_at)
}

// ---------------------------------------------------------------------------
// Edit view: acquisition
// ---------------------------------------------------------------------------

/// Opening the edit view on an unlocked firm acquires the lock and returns
/// the form props.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_view_acquires_lock(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool.clone());

    let response = get_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &common::token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["mode"], "editable");
    assert_eq!(json["entity"]["slug"], "harlan-vance");
    assert_eq!(json["entity"]["locked_by"], admin.id);

    let (locked_by, locked_at) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id));
    assert_eq!(locked_at, Some(common::start_time()));
}

/// Reopening the edit view as the current holder extends the lease instead
/// of blocking.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_reopen_by_holder_extends_lease(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, clock) = common::build_test_app(pool.clone());
    let token = common::token_for(&admin);

    let uri = format!("/api/v1/admin/law-firms/{firm_id}/edit");
    get_auth(app.clone(), &uri, &token).await;

    clock.advance(Duration::minutes(1));
    let response = get_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["mode"], "editable");

    let (locked_by, locked_at) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id), "holder must be unchanged");
    assert_eq!(
        locked_at,
        Some(common::start_time() + Duration::minutes(1)),
        "reopen must bump the lease timestamp"
    );
}

// ---------------------------------------------------------------------------
// Edit view: blocking and the locked notice
// ---------------------------------------------------------------------------

/// A second user opening the edit view gets the locked notice with the
/// holder's profile fields, and the lock is untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_view_blocked_for_other_user(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let editor = common::seed_user(&pool, "Jules Verne", "jules@lexhire.test", ROLE_EDITOR).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, clock) = common::build_test_app(pool.clone());

    let uri = format!("/api/v1/admin/law-firms/{firm_id}/edit");
    get_auth(app.clone(), &uri, &common::token_for(&admin)).await;

    clock.advance(Duration::minutes(5));
    let response = get_auth(app, &uri, &common::token_for(&editor)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["mode"], "locked");
    assert_eq!(json["entity"]["id"], firm_id);
    assert_eq!(json["entity"]["name"], "Harlan & Vance LLP");
    assert_eq!(json["entity"]["slug"], "harlan-vance");
    assert_eq!(json["locked_by"]["name"], "Nadia Okafor");
    assert_eq!(json["locked_by"]["email"], "nadia@lexhire.test");
    assert!(json["locked_at"].is_string(), "locked_at must be ISO-8601");

    let (locked_by, locked_at) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id), "blocked request must not mutate");
    assert_eq!(locked_at, Some(common::start_time()));
}

/// A lock still blocks at +14 minutes but is reclaimable at +16 minutes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_lock_is_reclaimable(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let editor = common::seed_user(&pool, "Jules Verne", "jules@lexhire.test", ROLE_EDITOR).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, clock) = common::build_test_app(pool.clone());
    let editor_token = common::token_for(&editor);

    let uri = format!("/api/v1/admin/law-firms/{firm_id}/edit");
    get_auth(app.clone(), &uri, &common::token_for(&admin)).await;

    clock.advance(Duration::minutes(14));
    let response = get_auth(app.clone(), &uri, &editor_token).await;
    assert_eq!(body_json(response).await["mode"], "locked");

    clock.advance(Duration::minutes(2));
    let response = get_auth(app, &uri, &editor_token).await;
    assert_eq!(body_json(response).await["mode"], "editable");

    let (locked_by, _) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(editor.id), "stale lock must be reclaimed");
}

// ---------------------------------------------------------------------------
// Heartbeat: refresh-lock
// ---------------------------------------------------------------------------

/// The holder's heartbeat bumps the lease and reports success.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_by_holder_succeeds(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, clock) = common::build_test_app(pool.clone());
    let token = common::token_for(&admin);

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &token,
    )
    .await;

    clock.advance(Duration::minutes(5));
    let response = post_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/refresh-lock"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let (_, locked_at) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_at, Some(common::start_time() + Duration::minutes(5)));
}

/// A non-holder's heartbeat gets `403 {"success": false}` and mutates
/// nothing.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_denied_for_non_holder(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let editor = common::seed_user(&pool, "Jules Verne", "jules@lexhire.test", ROLE_EDITOR).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, clock) = common::build_test_app(pool.clone());

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &common::token_for(&admin),
    )
    .await;

    clock.advance(Duration::minutes(5));
    let response = post_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/refresh-lock"),
        &common::token_for(&editor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["success"], false);

    let (locked_by, locked_at) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id));
    assert_eq!(locked_at, Some(common::start_time()), "denied refresh must not mutate");
}

/// The heartbeat requires authentication.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_requires_auth(pool: PgPool) {
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool);

    let response = common::post_json(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/refresh-lock"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

/// Release by the holder clears both lock columns.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_release_by_holder_clears_lock(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool.clone());
    let token = common::token_for(&admin);

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &token,
    )
    .await;

    let response = post_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/release-lock"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    assert_eq!(lock_columns(&pool, firm_id).await, (None, None));
}

/// Release by a non-holder still reports success but leaves the lock alone.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_release_by_non_holder_is_silent_noop(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let editor = common::seed_user(&pool, "Jules Verne", "jules@lexhire.test", ROLE_EDITOR).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool.clone());

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &common::token_for(&admin),
    )
    .await;

    let response = post_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}/release-lock"),
        &common::token_for(&editor),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);

    let (locked_by, _) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id), "non-holder release must be a no-op");
}

// ---------------------------------------------------------------------------
// Save path
// ---------------------------------------------------------------------------

/// Saving the edit form persists the fields and releases the lock.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_releases_lock(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool.clone());
    let token = common::token_for(&admin);

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &token,
    )
    .await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}"),
        &token,
        serde_json::json!({"city": "The Hague"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["city"], "The Hague");
    assert!(json["locked_by"].is_null());
    assert!(json["locked_at"].is_null());

    assert_eq!(lock_columns(&pool, firm_id).await, (None, None));
}

/// Another user's save does not steal or clear the holder's lock.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_by_non_holder_keeps_lock(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let editor = common::seed_user(&pool, "Jules Verne", "jules@lexhire.test", ROLE_EDITOR).await;
    let firm_id = common::seed_law_firm(&pool, "harlan-vance").await;
    let (app, _clock) = common::build_test_app(pool.clone());

    get_auth(
        app.clone(),
        &format!("/api/v1/admin/law-firms/{firm_id}/edit"),
        &common::token_for(&admin),
    )
    .await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/admin/law-firms/{firm_id}"),
        &common::token_for(&editor),
        serde_json::json!({"city": "Utrecht"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let (locked_by, _) = lock_columns(&pool, firm_id).await;
    assert_eq!(locked_by, Some(admin.id));
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_edit_view_missing_firm_returns_404(pool: PgPool) {
    let admin = common::seed_user(&pool, "Nadia Okafor", "nadia@lexhire.test", ROLE_ADMIN).await;
    let (app, _clock) = common::build_test_app(pool);

    let response = get_auth(
        app,
        "/api/v1/admin/law-firms/999999/edit",
        &common::token_for(&admin),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
