//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate lock decisions to `lexhire_core::edit_lock`,
//! persistence to the repositories in `lexhire_db`, and map errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod job_listing;
pub mod law_firm;
