//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexhire_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`LockHolder`] or a dedicated response type instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// Role name, one of the constants in `lexhire_core::roles`.
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The profile fields shown in a "currently being edited by X" notice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LockHolder {
    pub name: String,
    pub email: String,
}

impl From<&User> for LockHolder {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
