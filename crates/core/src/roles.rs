//! Well-known role name constants.
//!
//! These must match the `role` column defaults in the users migration.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";
