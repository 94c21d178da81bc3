//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The `write_lock` methods
//! on lockable-entity repositories are the only code that writes the
//! `locked_by` / `locked_at` columns.

pub mod job_listing_repo;
pub mod law_firm_repo;
pub mod user_repo;

pub use job_listing_repo::JobListingRepo;
pub use law_firm_repo::LawFirmRepo;
pub use user_repo::UserRepo;
