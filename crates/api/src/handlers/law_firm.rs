//! Handlers for the `/admin/law-firms` edit surface.
//!
//! Every route here is a thin wrapper: the lock decisions live in
//! `lexhire_core::edit_lock`, persistence in `LawFirmRepo`, and these
//! functions only load the row, run the state machine with the injected
//! clock, persist the outcome, and translate it to a status code.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use lexhire_core::edit_lock::{GateOutcome, RefreshDenied};
use lexhire_core::error::CoreError;
use lexhire_core::types::DbId;
use lexhire_db::models::law_firm::{LawFirm, LawFirmSummary, UpdateLawFirm};
use lexhire_db::models::user::LockHolder;
use lexhire_db::models::Lockable;
use lexhire_db::repositories::{LawFirmRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::{EditProps, LockAck};
use crate::state::AppState;

async fn load_firm(state: &AppState, id: DbId) -> AppResult<LawFirm> {
    LawFirmRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LawFirm",
            id,
        }))
}

/// GET /api/v1/admin/law-firms/{id}/edit
///
/// The edit-view access gate: if another user holds a live lock the
/// requester gets the locked-notice props and nothing is mutated;
/// otherwise the requester (re)claims the lock and gets the form props.
pub async fn edit(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EditProps<LawFirm, LawFirmSummary>>> {
    let mut firm = load_firm(&state, id).await?;

    let mut lock = firm.edit_lock();
    match lock.guard_edit(user.user_id, state.clock.now()) {
        GateOutcome::Blocked { holder, locked_at } => {
            // The FK on locked_by guarantees the holder row exists.
            let holder = UserRepo::find_by_id(&state.pool, holder)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!("Lock holder {holder} has no user row"))
                })?;
            Ok(Json(EditProps::Locked {
                entity: LawFirmSummary::from(&firm),
                locked_by: LockHolder::from(&holder),
                locked_at,
            }))
        }
        GateOutcome::Editable => {
            LawFirmRepo::write_lock(&state.pool, id, lock).await?;
            tracing::info!(user_id = user.user_id, law_firm_id = id, "Edit lock acquired");
            (firm.locked_by, firm.locked_at) = lock.into_columns();
            Ok(Json(EditProps::Editable { entity: firm }))
        }
    }
}

/// PUT /api/v1/admin/law-firms/{id}
///
/// Ordinary save path. Persists the edited fields, then releases the
/// requester's lock as a side effect -- saving ends the editing session.
pub async fn update(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLawFirm>,
) -> AppResult<Json<LawFirm>> {
    let mut firm = LawFirmRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "LawFirm",
            id,
        }))?;

    let mut lock = firm.edit_lock();
    lock.release(user.user_id);
    if lock != firm.edit_lock() {
        LawFirmRepo::write_lock(&state.pool, id, lock).await?;
        tracing::info!(user_id = user.user_id, law_firm_id = id, "Edit lock released on save");
        (firm.locked_by, firm.locked_at) = lock.into_columns();
    }

    Ok(Json(firm))
}

/// POST /api/v1/admin/law-firms/{id}/refresh-lock
///
/// Heartbeat endpoint polled by the open edit form. Denial is expected
/// traffic (the lock moved on), so it answers with a machine-readable
/// `{"success": false}` body rather than the error envelope.
pub async fn refresh_lock(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let firm = load_firm(&state, id).await?;

    let mut lock = firm.edit_lock();
    match lock.refresh(auth.user_id, state.clock.now()) {
        Ok(()) => {
            LawFirmRepo::write_lock(&state.pool, id, lock).await?;
            tracing::debug!(user_id = auth.user_id, law_firm_id = id, "Edit lock refreshed");
            Ok(Json(LockAck { success: true }).into_response())
        }
        Err(RefreshDenied) => {
            tracing::debug!(
                user_id = auth.user_id,
                law_firm_id = id,
                "Edit lock refresh denied"
            );
            Ok((StatusCode::FORBIDDEN, Json(LockAck { success: false })).into_response())
        }
    }
}

/// POST /api/v1/admin/law-firms/{id}/release-lock
///
/// Always reports success: a non-holder's release is a harmless no-op.
pub async fn release_lock(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<LockAck>> {
    let firm = load_firm(&state, id).await?;

    let mut lock = firm.edit_lock();
    lock.release(auth.user_id);
    if lock != firm.edit_lock() {
        LawFirmRepo::write_lock(&state.pool, id, lock).await?;
        tracing::info!(user_id = auth.user_id, law_firm_id = id, "Edit lock released");
    }

    Ok(Json(LockAck { success: true }))
}
