//! Handlers for the `/admin/job-listings` edit surface.
//!
//! Identical locking contract to the law-firm handlers; the mechanism is
//! entity-agnostic and only the row type and repository differ.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use lexhire_core::edit_lock::{GateOutcome, RefreshDenied};
use lexhire_core::error::CoreError;
use lexhire_core::types::DbId;
use lexhire_db::models::job_listing::{JobListing, JobListingSummary, UpdateJobListing};
use lexhire_db::models::user::LockHolder;
use lexhire_db::models::Lockable;
use lexhire_db::repositories::{JobListingRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::{EditProps, LockAck};
use crate::state::AppState;

async fn load_listing(state: &AppState, id: DbId) -> AppResult<JobListing> {
    JobListingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JobListing",
            id,
        }))
}

/// GET /api/v1/admin/job-listings/{id}/edit
pub async fn edit(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EditProps<JobListing, JobListingSummary>>> {
    let mut listing = load_listing(&state, id).await?;

    let mut lock = listing.edit_lock();
    match lock.guard_edit(user.user_id, state.clock.now()) {
        GateOutcome::Blocked { holder, locked_at } => {
            let holder = UserRepo::find_by_id(&state.pool, holder)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!("Lock holder {holder} has no user row"))
                })?;
            Ok(Json(EditProps::Locked {
                entity: JobListingSummary::from(&listing),
                locked_by: LockHolder::from(&holder),
                locked_at,
            }))
        }
        GateOutcome::Editable => {
            JobListingRepo::write_lock(&state.pool, id, lock).await?;
            tracing::info!(
                user_id = user.user_id,
                job_listing_id = id,
                "Edit lock acquired"
            );
            (listing.locked_by, listing.locked_at) = lock.into_columns();
            Ok(Json(EditProps::Editable { entity: listing }))
        }
    }
}

/// PUT /api/v1/admin/job-listings/{id}
pub async fn update(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJobListing>,
) -> AppResult<Json<JobListing>> {
    let mut listing = JobListingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JobListing",
            id,
        }))?;

    let mut lock = listing.edit_lock();
    lock.release(user.user_id);
    if lock != listing.edit_lock() {
        JobListingRepo::write_lock(&state.pool, id, lock).await?;
        tracing::info!(
            user_id = user.user_id,
            job_listing_id = id,
            "Edit lock released on save"
        );
        (listing.locked_by, listing.locked_at) = lock.into_columns();
    }

    Ok(Json(listing))
}

/// POST /api/v1/admin/job-listings/{id}/refresh-lock
pub async fn refresh_lock(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let listing = load_listing(&state, id).await?;

    let mut lock = listing.edit_lock();
    match lock.refresh(auth.user_id, state.clock.now()) {
        Ok(()) => {
            JobListingRepo::write_lock(&state.pool, id, lock).await?;
            tracing::debug!(
                user_id = auth.user_id,
                job_listing_id = id,
                "Edit lock refreshed"
            );
            Ok(Json(LockAck { success: true }).into_response())
        }
        Err(RefreshDenied) => {
            tracing::debug!(
                user_id = auth.user_id,
                job_listing_id = id,
                "Edit lock refresh denied"
            );
            Ok((StatusCode::FORBIDDEN, Json(LockAck { success: false })).into_response())
        }
    }
}

/// POST /api/v1/admin/job-listings/{id}/release-lock
pub async fn release_lock(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LockAck>> {
    let listing = load_listing(&state, id).await?;

    let mut lock = listing.edit_lock();
    lock.release(auth.user_id);
    if lock != listing.edit_lock() {
        JobListingRepo::write_lock(&state.pool, id, lock).await?;
        tracing::info!(
            user_id = auth.user_id,
            job_listing_id = id,
            "Edit lock released"
        );
    }

    Ok(Json(LockAck { success: true }))
}
