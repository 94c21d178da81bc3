//! Domain logic shared across the Lexhire backend.
//!
//! This crate has no internal dependencies so the DB layer, API layer,
//! and any future worker tooling can all reference the same types,
//! errors, and edit-lock semantics.

pub mod clock;
pub mod edit_lock;
pub mod error;
pub mod roles;
pub mod types;
