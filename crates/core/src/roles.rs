//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint on the `users` table.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";
