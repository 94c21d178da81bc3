//! Role-based access control (RBAC) extractors.
//!
//! Role gating is applied upstream of any edit-lock semantics: it decides
//! who may reach the admin surface at all, while the lock decides who may
//! hold a record open right now.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use lexhire_core::error::CoreError;
use lexhire_core::roles::{ROLE_ADMIN, ROLE_EDITOR};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires a back-office role (`admin` or `editor`). Rejects with 403
/// Forbidden otherwise.
///
/// ```ignore
/// async fn staff_only(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     // user is guaranteed to be back-office staff here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN && user.role != ROLE_EDITOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Back-office role required".into(),
            )));
        }
        Ok(RequireStaff(user))
    }
}
