//! User model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub industry_id: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Profile completeness drives both the progress calculator and the
    /// PROFILE_COMPLETED action count: all of first name, last name, and
    /// phone must be present and non-empty.
    pub fn profile_complete(&self) -> bool {
        fn set(field: &Option<String>) -> bool {
            field.as_deref().is_some_and(|v| !v.trim().is_empty())
        }
        set(&self.first_name) && set(&self.last_name) && set(&self.phone)
    }
}

/// DTO for inserting a new user.
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub industry_id: Option<String>,
}

/// DTO for patching a user's profile. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub company_name: Option<String>,
    pub industry_id: Option<String>,
}
