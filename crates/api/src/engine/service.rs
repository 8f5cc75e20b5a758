//! Gamification orchestration service.
//!
//! One instance lives in [`AppState`](crate::state::AppState) and is shared by
//! every handler. Domain handlers call [`GamificationService::update`] after
//! persisting their entity; the service credits points, runs the badge
//! evaluator, and returns a summary the handler attaches to its response.
//!
//! `update` is deliberately infallible: a gamification failure must never
//! fail the domain action that triggered it. Errors are logged and an empty
//! result is returned instead.

use serde::Serialize;
use triport_core::gamification::{ActionType, LeaderboardPeriod};
use triport_core::industry::Industry;
use triport_core::progress::{completion_percentage, EntityCounts, BASE_ACTION_POINTS};
use triport_core::types::DbId;

use triport_db::models::achievement::Achievement;
use triport_db::models::badge::{Badge, EarnedBadge};
use triport_db::models::progress::LeaderboardEntry;
use triport_db::models::user::User;
use triport_db::repositories::{
    AchievementRepo, BadgeRepo, ShipmentRepo, TourPackageRepo, TravelBookingRepo, UserBadgeRepo,
    UserProgressRepo, UserRepo,
};
use triport_db::DbPool;

use super::evaluator;

/// Trailing window for the "recent achievements" summary, in hours.
const ACHIEVEMENT_WINDOW_HOURS: i64 = 24;

/// Maximum achievements included in an update summary.
const RECENT_ACHIEVEMENTS_LIMIT: i64 = 5;

/// Outcome of a gamification update, returned alongside the domain response.
#[derive(Debug, Default, Serialize)]
pub struct GamificationResult {
    /// Achievements recorded in the last 24 hours, most recent first (max 5).
    pub achievements: Vec<Achievement>,
    /// Badges newly awarded by this update.
    pub badges: Vec<EarnedBadge>,
}

/// Point-in-time progress view for one user.
#[derive(Debug, Serialize)]
pub struct ProgressSnapshot {
    /// Industry slug, or `None` when the user has no affiliation.
    pub industry: Option<String>,
    /// Freshly recomputed 0-100 completion percentage.
    pub completion_percentage: u8,
    pub total_points: i64,
    pub current_level: i64,
    /// The entity counts the percentage was computed from.
    pub counts: EntityCounts,
}

/// Aggregate gamification statistics for one user.
#[derive(Debug, Serialize)]
pub struct UserStats {
    pub total_points: i64,
    pub current_level: i64,
    pub badges_earned: i64,
    pub total_achievements: i64,
    pub completion_percentage: u8,
}

/// Shared gamification engine handle. Cheap to clone; owns a pool handle and
/// nothing else.
#[derive(Debug, Clone)]
pub struct GamificationService {
    pool: DbPool,
}

impl GamificationService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Record a domain action for a user: credit base points, evaluate badge
    /// criteria, and return the recent-achievement summary.
    ///
    /// Never fails. Storage errors are logged and swallowed so the caller's
    /// domain write (already committed) is unaffected.
    pub async fn update(&self, user_id: DbId, action: ActionType) -> GamificationResult {
        match self.run_update(user_id, action).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    user_id,
                    action = action.as_str(),
                    error = %e,
                    "Gamification update failed",
                );
                GamificationResult::default()
            }
        }
    }

    async fn run_update(
        &self,
        user_id: DbId,
        action: ActionType,
    ) -> Result<GamificationResult, sqlx::Error> {
        let Some(user) = UserRepo::find_by_id(&self.pool, user_id).await? else {
            tracing::warn!(user_id, "Gamification update for unknown user");
            return Ok(GamificationResult::default());
        };

        let industry = Self::user_industry(&user).unwrap_or(Industry::Other);

        UserProgressRepo::add_points(&self.pool, user_id, BASE_ACTION_POINTS).await?;

        let badges = evaluator::check_and_award_badges(&self.pool, &user, industry, action).await?;

        let achievements = AchievementRepo::recent_for_user(
            &self.pool,
            user_id,
            ACHIEVEMENT_WINDOW_HOURS,
            RECENT_ACHIEVEMENTS_LIMIT,
        )
        .await?;

        Ok(GamificationResult {
            achievements,
            badges,
        })
    }

    /// The user's progress snapshot, or `None` for an unknown user.
    ///
    /// The percentage is recomputed from live entity counts on every call;
    /// it is independent of the accumulated point total.
    pub async fn progress(&self, user_id: DbId) -> Result<Option<ProgressSnapshot>, sqlx::Error> {
        let Some(user) = UserRepo::find_by_id(&self.pool, user_id).await? else {
            return Ok(None);
        };

        let industry = Self::user_industry(&user);
        let counts = self.entity_counts(&user).await?;
        let percentage = completion_percentage(industry, &counts);

        let (total_points, current_level) = match UserProgressRepo::find_for_user(
            &self.pool, user_id,
        )
        .await?
        {
            Some(row) => (row.total_points, row.current_level),
            None => (0, 1),
        };

        Ok(Some(ProgressSnapshot {
            industry: industry.map(|i| i.slug().to_string()),
            completion_percentage: percentage,
            total_points,
            current_level,
            counts,
        }))
    }

    /// A user's earned badges, most recent first.
    pub async fn earned_badges(&self, user_id: DbId) -> Result<Vec<EarnedBadge>, sqlx::Error> {
        UserBadgeRepo::list_for_user(&self.pool, user_id).await
    }

    /// The active badge catalog available to an industry (its own badges
    /// plus universal ones).
    pub async fn available_badges(&self, industry: Industry) -> Result<Vec<Badge>, sqlx::Error> {
        BadgeRepo::list_active_for_industry(&self.pool, industry.slug()).await
    }

    /// All of a user's achievements, most recent first.
    pub async fn achievements(&self, user_id: DbId) -> Result<Vec<Achievement>, sqlx::Error> {
        AchievementRepo::list_for_user(&self.pool, user_id).await
    }

    /// Industry leaderboard over the requested trailing period.
    pub async fn leaderboard(
        &self,
        industry: Industry,
        period: LeaderboardPeriod,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        UserProgressRepo::leaderboard(&self.pool, industry.slug(), period.window_days(), limit)
            .await
    }

    /// Aggregate statistics for one user, or `None` for an unknown user.
    pub async fn stats(&self, user_id: DbId) -> Result<Option<UserStats>, sqlx::Error> {
        let Some(snapshot) = self.progress(user_id).await? else {
            return Ok(None);
        };

        let badges_earned = UserBadgeRepo::list_for_user(&self.pool, user_id).await?.len() as i64;
        let total_achievements =
            AchievementRepo::list_for_user(&self.pool, user_id).await?.len() as i64;

        Ok(Some(UserStats {
            total_points: snapshot.total_points,
            current_level: snapshot.current_level,
            badges_earned,
            total_achievements,
            completion_percentage: snapshot.completion_percentage,
        }))
    }

    fn user_industry(user: &User) -> Option<Industry> {
        user.industry_id.as_deref().and_then(Industry::from_label)
    }

    async fn entity_counts(&self, user: &User) -> Result<EntityCounts, sqlx::Error> {
        Ok(EntityCounts {
            profile_complete: user.profile_complete(),
            tour_packages: TourPackageRepo::count_for_user(&self.pool, user.id).await?,
            travel_bookings: TravelBookingRepo::count_for_user(&self.pool, user.id).await?,
            shipments: ShipmentRepo::count_for_user(&self.pool, user.id).await?,
        })
    }
}
