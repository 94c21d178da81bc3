//! Law firm entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexhire_core::edit_lock::EditLock;
use lexhire_core::types::{DbId, Timestamp};

use super::Lockable;

/// A row from the `law_firms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LawFirm {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    /// Edit-lock holder; interpret only through [`Lockable::edit_lock`].
    pub locked_by: Option<DbId>,
    /// Edit-lock acquisition/renewal instant.
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Lockable for LawFirm {
    fn edit_lock(&self) -> EditLock {
        EditLock::from_columns(self.locked_by, self.locked_at)
    }
}

/// The identifying fields rendered in the locked-notice view.
#[derive(Debug, Clone, Serialize)]
pub struct LawFirmSummary {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

impl From<&LawFirm> for LawFirmSummary {
    fn from(firm: &LawFirm) -> Self {
        Self {
            id: firm.id,
            name: firm.name.clone(),
            slug: firm.slug.clone(),
        }
    }
}

/// DTO for creating a law firm.
#[derive(Debug, Deserialize)]
pub struct CreateLawFirm {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
}

/// DTO for updating a law firm. All fields are optional; lock columns are
/// never part of an update body.
#[derive(Debug, Deserialize)]
pub struct UpdateLawFirm {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
}
