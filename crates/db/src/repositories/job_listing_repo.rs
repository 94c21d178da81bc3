//! Repository for the `job_listings` table.

use sqlx::PgPool;

use lexhire_core::edit_lock::EditLock;
use lexhire_core::types::DbId;

use crate::models::job_listing::{CreateJobListing, JobListing, UpdateJobListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, law_firm_id, title, slug, description, location, \
                        employment_type, locked_by, locked_at, created_at, updated_at";

/// Provides CRUD and edit-lock persistence for job listings.
pub struct JobListingRepo;

impl JobListingRepo {
    /// Insert a new job listing, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobListing,
    ) -> Result<JobListing, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_listings (law_firm_id, title, slug, description, location, employment_type)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(input.law_firm_id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.employment_type)
            .fetch_one(pool)
            .await
    }

    /// Find a job listing by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobListing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_listings WHERE id = $1");
        sqlx::query_as::<_, JobListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a job listing's editable fields. Only non-`None` fields in
    /// `input` are applied; the lock columns are never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobListing,
    ) -> Result<Option<JobListing>, sqlx::Error> {
        let query = format!(
            "UPDATE job_listings SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                location = COALESCE($5, location),
                employment_type = COALESCE($6, employment_type),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobListing>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.location)
            .bind(&input.employment_type)
            .fetch_optional(pool)
            .await
    }

    /// Persist an edit-lock value onto a job listing row, both columns
    /// verbatim.
    ///
    /// Returns `true` if the row exists.
    pub async fn write_lock(
        pool: &PgPool,
        id: DbId,
        lock: EditLock,
    ) -> Result<bool, sqlx::Error> {
        let (locked_by, locked_at) = lock.into_columns();
        let result =
            sqlx::query("UPDATE job_listings SET locked_by = $2, locked_at = $3 WHERE id = $1")
                .bind(id)
                .bind(locked_by)
                .bind(locked_at)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
