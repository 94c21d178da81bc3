//! Repository for the `law_firms` table.

use sqlx::PgPool;

use lexhire_core::edit_lock::EditLock;
use lexhire_core::types::DbId;

use crate::models::law_firm::{CreateLawFirm, LawFirm, UpdateLawFirm};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug, description, website, city, \
                        locked_by, locked_at, created_at, updated_at";

/// Provides CRUD and edit-lock persistence for law firms.
pub struct LawFirmRepo;

impl LawFirmRepo {
    /// Insert a new law firm, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLawFirm) -> Result<LawFirm, sqlx::Error> {
        let query = format!(
            "INSERT INTO law_firms (name, slug, description, website, city)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawFirm>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.website)
            .bind(&input.city)
            .fetch_one(pool)
            .await
    }

    /// Find a law firm by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LawFirm>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM law_firms WHERE id = $1");
        sqlx::query_as::<_, LawFirm>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update a law firm's editable fields. Only non-`None` fields in
    /// `input` are applied; the lock columns are never touched here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLawFirm,
    ) -> Result<Option<LawFirm>, sqlx::Error> {
        let query = format!(
            "UPDATE law_firms SET
                name = COALESCE($2, name),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                website = COALESCE($5, website),
                city = COALESCE($6, city),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawFirm>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(&input.website)
            .bind(&input.city)
            .fetch_optional(pool)
            .await
    }

    /// Persist an edit-lock value onto a law firm row, both columns verbatim.
    ///
    /// Returns `true` if the row exists.
    pub async fn write_lock(
        pool: &PgPool,
        id: DbId,
        lock: EditLock,
    ) -> Result<bool, sqlx::Error> {
        let (locked_by, locked_at) = lock.into_columns();
        let result =
            sqlx::query("UPDATE law_firms SET locked_by = $2, locked_at = $3 WHERE id = $1")
                .bind(id)
                .bind(locked_by)
                .bind(locked_at)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
