//! Badge criterion evaluation and awarding.
//!
//! Evaluation is split in two: [`evaluate_criterion`] is a pure function of a
//! criterion, the triggering action, and the user's current count, so the
//! decision table is unit-testable without a database. The async
//! [`check_and_award_badges`] wraps it with catalog lookup, duplicate checks,
//! and achievement logging.

use serde_json::json;
use sqlx::PgPool;
use triport_core::gamification::{
    badge_applies_to, AchievementType, ActionType, BadgeCriterion,
};
use triport_core::industry::Industry;

use triport_db::models::achievement::CreateAchievement;
use triport_db::models::badge::EarnedBadge;
use triport_db::models::user::User;
use triport_db::repositories::{
    AchievementRepo, BadgeRepo, ShipmentRepo, TourPackageRepo, TravelBookingRepo, UserBadgeRepo,
};

/// Outcome of evaluating a single criterion against one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionOutcome {
    /// Threshold met; the badge should be awarded if not already held.
    Eligible,
    /// The criterion tracks this action but the threshold is not reached.
    NotYet,
    /// The criterion tracks a different action type.
    Indifferent,
    /// The criterion kind has no evaluator yet (rating, streak, revenue, rate).
    Unsupported,
}

/// Decide whether a criterion is satisfied by the triggering action given the
/// user's current cumulative count for that action.
pub fn evaluate_criterion(
    criterion: &BadgeCriterion,
    action: ActionType,
    current_count: i64,
) -> CriterionOutcome {
    if criterion.action_type() != action {
        return CriterionOutcome::Indifferent;
    }
    match *criterion {
        BadgeCriterion::CountThreshold { required_count, .. } => {
            if current_count >= required_count {
                CriterionOutcome::Eligible
            } else {
                CriterionOutcome::NotYet
            }
        }
        BadgeCriterion::RatingThreshold { .. }
        | BadgeCriterion::Streak { .. }
        | BadgeCriterion::RevenueThreshold { .. }
        | BadgeCriterion::RateThreshold { .. } => CriterionOutcome::Unsupported,
    }
}

/// The user's cumulative count for an action, read after the triggering
/// entity has been persisted.
async fn action_count(pool: &PgPool, user: &User, action: ActionType) -> Result<i64, sqlx::Error> {
    match action {
        ActionType::TourCreated => TourPackageRepo::count_for_user(pool, user.id).await,
        ActionType::BookingCreated => TravelBookingRepo::count_for_user(pool, user.id).await,
        ActionType::ShipmentCreated => ShipmentRepo::count_for_user(pool, user.id).await,
        ActionType::ProfileCompleted => Ok(i64::from(user.profile_complete())),
    }
}

/// Check every active badge the user's industry can earn and award the ones
/// whose criteria are now met.
///
/// Each award also appends a MILESTONE_REACHED achievement carrying the
/// badge's point value. Awarding is idempotent: a badge already held, or one
/// lost to a concurrent request, is skipped without error. Malformed catalog
/// entries are logged and skipped rather than failing the whole pass.
pub async fn check_and_award_badges(
    pool: &PgPool,
    user: &User,
    industry: Industry,
    action: ActionType,
) -> Result<Vec<EarnedBadge>, sqlx::Error> {
    let candidates = BadgeRepo::list_active_for_industry(pool, industry.slug()).await?;
    let current_count = action_count(pool, user, action).await?;

    let mut awarded = Vec::new();
    for badge in candidates {
        if !badge_applies_to(badge.industry.as_deref(), industry) {
            continue;
        }

        let criterion = match badge.criterion() {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(
                    badge_id = badge.id,
                    badge = %badge.name,
                    error = %e,
                    "Skipping badge with malformed criteria",
                );
                continue;
            }
        };

        match evaluate_criterion(&criterion, action, current_count) {
            CriterionOutcome::Eligible => {}
            CriterionOutcome::Indifferent | CriterionOutcome::NotYet => continue,
            CriterionOutcome::Unsupported => {
                tracing::debug!(
                    badge_id = badge.id,
                    badge = %badge.name,
                    "Criterion kind has no evaluator yet",
                );
                continue;
            }
        }

        if UserBadgeRepo::exists(pool, user.id, badge.id).await? {
            continue;
        }

        let Some(user_badge) = UserBadgeRepo::award(pool, user.id, badge.id).await? else {
            // A concurrent request inserted the row between our existence
            // check and the insert; that request records the achievement.
            continue;
        };

        AchievementRepo::create(
            pool,
            &CreateAchievement {
                user_id: user.id,
                achievement_type: AchievementType::MilestoneReached.as_str().to_string(),
                category: action.category_label().to_string(),
                description: format!("Earned badge: {}", badge.name),
                points: badge.points,
                metadata: json!({
                    "badge_id": badge.id,
                    "action_type": action.as_str(),
                    "count": current_count,
                }),
            },
        )
        .await?;

        tracing::info!(
            user_id = user.id,
            badge_id = badge.id,
            badge = %badge.name,
            points = badge.points,
            "Badge awarded",
        );

        awarded.push(EarnedBadge {
            badge_id: badge.id,
            name: badge.name,
            description: badge.description,
            category: badge.category,
            icon_url: badge.icon_url,
            points: badge.points,
            earned_at: user_badge.earned_at,
        });
    }

    Ok(awarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_criterion(action: ActionType, required: i64) -> BadgeCriterion {
        BadgeCriterion::CountThreshold {
            action_type: action,
            required_count: required,
        }
    }

    #[test]
    fn threshold_met_is_eligible() {
        let c = count_criterion(ActionType::TourCreated, 5);
        assert_eq!(
            evaluate_criterion(&c, ActionType::TourCreated, 5),
            CriterionOutcome::Eligible
        );
        assert_eq!(
            evaluate_criterion(&c, ActionType::TourCreated, 12),
            CriterionOutcome::Eligible
        );
    }

    #[test]
    fn threshold_not_met_is_not_yet() {
        let c = count_criterion(ActionType::ShipmentCreated, 20);
        assert_eq!(
            evaluate_criterion(&c, ActionType::ShipmentCreated, 19),
            CriterionOutcome::NotYet
        );
        assert_eq!(
            evaluate_criterion(&c, ActionType::ShipmentCreated, 0),
            CriterionOutcome::NotYet
        );
    }

    #[test]
    fn other_actions_are_indifferent() {
        let c = count_criterion(ActionType::TourCreated, 1);
        assert_eq!(
            evaluate_criterion(&c, ActionType::BookingCreated, 100),
            CriterionOutcome::Indifferent
        );
    }

    #[test]
    fn rating_and_streak_are_unsupported() {
        let rating = BadgeCriterion::RatingThreshold {
            action_type: ActionType::TourCreated,
            min_rating: 4.8,
            min_reviews: 10,
        };
        assert_eq!(
            evaluate_criterion(&rating, ActionType::TourCreated, 50),
            CriterionOutcome::Unsupported
        );

        let streak = BadgeCriterion::Streak {
            action_type: ActionType::BookingCreated,
            consecutive_days: 30,
        };
        assert_eq!(
            evaluate_criterion(&streak, ActionType::BookingCreated, 50),
            CriterionOutcome::Unsupported
        );
        // A streak criterion for another action is still just indifferent.
        assert_eq!(
            evaluate_criterion(&streak, ActionType::TourCreated, 50),
            CriterionOutcome::Indifferent
        );
    }

    #[test]
    fn revenue_and_rate_are_unsupported() {
        let revenue = BadgeCriterion::RevenueThreshold {
            action_type: ActionType::BookingCreated,
            min_amount: 10_000,
        };
        assert_eq!(
            evaluate_criterion(&revenue, ActionType::BookingCreated, 500),
            CriterionOutcome::Unsupported
        );

        let rate = BadgeCriterion::RateThreshold {
            action_type: ActionType::ShipmentCreated,
            min_rate: 0.95,
            min_count: 50,
        };
        assert_eq!(
            evaluate_criterion(&rate, ActionType::ShipmentCreated, 80),
            CriterionOutcome::Unsupported
        );
        assert_eq!(
            evaluate_criterion(&rate, ActionType::TourCreated, 80),
            CriterionOutcome::Indifferent
        );
    }
}
