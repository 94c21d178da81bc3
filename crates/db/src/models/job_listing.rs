//! Job listing entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lexhire_core::edit_lock::EditLock;
use lexhire_core::types::{DbId, Timestamp};

use super::Lockable;

/// A row from the `job_listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobListing {
    pub id: DbId,
    pub law_firm_id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    /// Edit-lock holder; interpret only through [`Lockable::edit_lock`].
    pub locked_by: Option<DbId>,
    /// Edit-lock acquisition/renewal instant.
    pub locked_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Lockable for JobListing {
    fn edit_lock(&self) -> EditLock {
        EditLock::from_columns(self.locked_by, self.locked_at)
    }
}

/// The identifying fields rendered in the locked-notice view.
#[derive(Debug, Clone, Serialize)]
pub struct JobListingSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}

impl From<&JobListing> for JobListingSummary {
    fn from(listing: &JobListing) -> Self {
        Self {
            id: listing.id,
            title: listing.title.clone(),
            slug: listing.slug.clone(),
        }
    }
}

/// DTO for creating a job listing.
#[derive(Debug, Deserialize)]
pub struct CreateJobListing {
    pub law_firm_id: DbId,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}

/// DTO for updating a job listing. All fields are optional; lock columns are
/// never part of an update body.
#[derive(Debug, Deserialize)]
pub struct UpdateJobListing {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
}
