//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Lockable entities carry the nullable `locked_by` / `locked_at` column
//! pair and expose it as a [`lexhire_core::edit_lock::EditLock`] value via
//! [`Lockable::edit_lock`]; all lock decisions run on that value and are
//! written back through the owning repository's `write_lock`.

pub mod job_listing;
pub mod law_firm;
pub mod user;

use lexhire_core::edit_lock::EditLock;

/// A record that can be exclusively claimed for editing.
pub trait Lockable {
    /// The entity's edit-lock state, rebuilt from its lock columns.
    fn edit_lock(&self) -> EditLock;
}
