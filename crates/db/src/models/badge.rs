//! Badge catalog and award models.

use serde::Serialize;
use sqlx::FromRow;
use triport_core::gamification::{BadgeCategory, BadgeCriterion};
use triport_core::types::{DbId, Timestamp};

/// A row from the `badges` table. Definitions are created by the seed and
/// immutable at runtime apart from the `is_active` flag.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Industry slug, or `None` for universal badges.
    pub industry: Option<String>,
    pub criteria: serde_json::Value,
    pub icon_url: Option<String>,
    pub points: i64,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Badge {
    /// Parse the stored criterion into its typed form.
    pub fn criterion(&self) -> Result<BadgeCriterion, triport_core::error::CoreError> {
        BadgeCriterion::from_json(&self.criteria)
    }
}

/// Seed-time badge definition.
pub struct BadgeDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub category: BadgeCategory,
    /// Industry slug, or `None` for universal badges.
    pub industry: Option<&'static str>,
    pub criterion: BadgeCriterion,
    pub icon_url: &'static str,
    pub points: i64,
}

/// A row from the `user_badges` table: one earned badge.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBadge {
    pub id: DbId,
    pub user_id: DbId,
    pub badge_id: DbId,
    pub earned_at: Timestamp,
}

/// An earned badge joined with its definition, as returned to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EarnedBadge {
    pub badge_id: DbId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub icon_url: Option<String>,
    pub points: i64,
    pub earned_at: Timestamp,
}
