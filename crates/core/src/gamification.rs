//! Gamification vocabulary: action types, badge categories, achievement
//! types, leaderboard periods, and the badge criterion variant type.
//!
//! All enumerations are closed sets validated at the API boundary.
//! Unrecognized string tags are rejected with [`CoreError::Validation`]
//! instead of being carried around as free-form strings. The wire form is
//! SCREAMING_SNAKE_CASE to match the seeded catalog and API payloads.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::industry::Industry;

// ---------------------------------------------------------------------------
// Action types
// ---------------------------------------------------------------------------

/// A domain action that can drive badge criteria and point awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    TourCreated,
    BookingCreated,
    ShipmentCreated,
    ProfileCompleted,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::TourCreated => "TOUR_CREATED",
            ActionType::BookingCreated => "BOOKING_CREATED",
            ActionType::ShipmentCreated => "SHIPMENT_CREATED",
            ActionType::ProfileCompleted => "PROFILE_COMPLETED",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "TOUR_CREATED" => Ok(ActionType::TourCreated),
            "BOOKING_CREATED" => Ok(ActionType::BookingCreated),
            "SHIPMENT_CREATED" => Ok(ActionType::ShipmentCreated),
            "PROFILE_COMPLETED" => Ok(ActionType::ProfileCompleted),
            other => Err(CoreError::Validation(format!(
                "Invalid action type '{other}'. Must be one of: TOUR_CREATED, \
                 BOOKING_CREATED, SHIPMENT_CREATED, PROFILE_COMPLETED"
            ))),
        }
    }

    /// The achievement category label recorded alongside awards for this
    /// action (e.g. `"tour"` for TOUR_CREATED).
    pub fn category_label(self) -> &'static str {
        match self {
            ActionType::TourCreated => "tour",
            ActionType::BookingCreated => "travel",
            ActionType::ShipmentCreated => "logistics",
            ActionType::ProfileCompleted => "profile",
        }
    }
}

// ---------------------------------------------------------------------------
// Badge categories
// ---------------------------------------------------------------------------

/// Catalog grouping for badge definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeCategory {
    Milestone,
    Achievement,
    Completion,
    Revenue,
    Special,
}

impl BadgeCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeCategory::Milestone => "MILESTONE",
            BadgeCategory::Achievement => "ACHIEVEMENT",
            BadgeCategory::Completion => "COMPLETION",
            BadgeCategory::Revenue => "REVENUE",
            BadgeCategory::Special => "SPECIAL",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "MILESTONE" => Ok(BadgeCategory::Milestone),
            "ACHIEVEMENT" => Ok(BadgeCategory::Achievement),
            "COMPLETION" => Ok(BadgeCategory::Completion),
            "REVENUE" => Ok(BadgeCategory::Revenue),
            "SPECIAL" => Ok(BadgeCategory::Special),
            other => Err(CoreError::Validation(format!(
                "Invalid badge category '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Achievement types
// ---------------------------------------------------------------------------

/// The kind of gamification event an achievement row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementType {
    FirstAction,
    MilestoneReached,
    StreakAchieved,
    TargetMet,
    SpecialEvent,
}

impl AchievementType {
    pub fn as_str(self) -> &'static str {
        match self {
            AchievementType::FirstAction => "FIRST_ACTION",
            AchievementType::MilestoneReached => "MILESTONE_REACHED",
            AchievementType::StreakAchieved => "STREAK_ACHIEVED",
            AchievementType::TargetMet => "TARGET_MET",
            AchievementType::SpecialEvent => "SPECIAL_EVENT",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "FIRST_ACTION" => Ok(AchievementType::FirstAction),
            "MILESTONE_REACHED" => Ok(AchievementType::MilestoneReached),
            "STREAK_ACHIEVED" => Ok(AchievementType::StreakAchieved),
            "TARGET_MET" => Ok(AchievementType::TargetMet),
            "SPECIAL_EVENT" => Ok(AchievementType::SpecialEvent),
            other => Err(CoreError::Validation(format!(
                "Invalid achievement type '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Leaderboard periods
// ---------------------------------------------------------------------------

/// Trailing window over which leaderboard scores are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaderboardPeriod {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl LeaderboardPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaderboardPeriod::Weekly => "WEEKLY",
            LeaderboardPeriod::Monthly => "MONTHLY",
            LeaderboardPeriod::Quarterly => "QUARTERLY",
            LeaderboardPeriod::Yearly => "YEARLY",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "WEEKLY" => Ok(LeaderboardPeriod::Weekly),
            "MONTHLY" => Ok(LeaderboardPeriod::Monthly),
            "QUARTERLY" => Ok(LeaderboardPeriod::Quarterly),
            "YEARLY" => Ok(LeaderboardPeriod::Yearly),
            other => Err(CoreError::Validation(format!(
                "Invalid period '{other}'. Must be WEEKLY, MONTHLY, QUARTERLY, or YEARLY"
            ))),
        }
    }

    /// Window length in whole days.
    pub fn window_days(self) -> i64 {
        match self {
            LeaderboardPeriod::Weekly => 7,
            LeaderboardPeriod::Monthly => 30,
            LeaderboardPeriod::Quarterly => 90,
            LeaderboardPeriod::Yearly => 365,
        }
    }
}

// ---------------------------------------------------------------------------
// Badge criteria
// ---------------------------------------------------------------------------

/// Eligibility criterion attached to a badge definition.
///
/// Stored as tagged JSON in `badges.criteria`. Only `count_threshold`
/// criteria are evaluated by the award engine today; rating, streak,
/// revenue, and rate criteria exist in the seeded catalog but have no source
/// data yet, so the evaluator reports them unsupported instead of silently
/// dropping them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BadgeCriterion {
    /// Cumulative action count reaches `required_count`.
    CountThreshold {
        action_type: ActionType,
        required_count: i64,
    },
    /// Average rating over at least `min_reviews` reviews reaches
    /// `min_rating`. Not yet evaluated.
    RatingThreshold {
        action_type: ActionType,
        min_rating: f64,
        min_reviews: i64,
    },
    /// Action performed on `consecutive_days` consecutive days.
    /// Not yet evaluated.
    Streak {
        action_type: ActionType,
        consecutive_days: i64,
    },
    /// Cumulative transaction value for the action reaches `min_amount`.
    /// Not yet evaluated.
    RevenueThreshold {
        action_type: ActionType,
        min_amount: i64,
    },
    /// Success rate over at least `min_count` actions reaches `min_rate`.
    /// Not yet evaluated.
    RateThreshold {
        action_type: ActionType,
        min_rate: f64,
        min_count: i64,
    },
}

impl BadgeCriterion {
    /// The action type this criterion reacts to. Criteria are indifferent to
    /// all other action types.
    pub fn action_type(&self) -> ActionType {
        match *self {
            BadgeCriterion::CountThreshold { action_type, .. }
            | BadgeCriterion::RatingThreshold { action_type, .. }
            | BadgeCriterion::Streak { action_type, .. }
            | BadgeCriterion::RevenueThreshold { action_type, .. }
            | BadgeCriterion::RateThreshold { action_type, .. } => action_type,
        }
    }

    /// Parse a criterion from its stored JSON form.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CoreError> {
        serde_json::from_value(value.clone())
            .map_err(|e| CoreError::Validation(format!("Invalid badge criterion: {e}")))
    }
}

/// A badge scoped to `industry = NULL` applies to users of every industry.
/// This helper centralizes the universal-badge check used by the evaluator.
pub fn badge_applies_to(badge_industry: Option<&str>, industry: Industry) -> bool {
    match badge_industry {
        None => true,
        Some(slug) => slug == industry.slug(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_type_parse_round_trips() {
        for raw in [
            "TOUR_CREATED",
            "BOOKING_CREATED",
            "SHIPMENT_CREATED",
            "PROFILE_COMPLETED",
        ] {
            let parsed = ActionType::parse(raw).expect("known action type");
            assert_eq!(parsed.as_str(), raw);
        }
    }

    #[test]
    fn unknown_action_type_is_rejected() {
        assert!(ActionType::parse("INVOICE_SENT").is_err());
        assert!(ActionType::parse("tour_created").is_err());
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!(LeaderboardPeriod::parse("DAILY").is_err());
        assert!(LeaderboardPeriod::parse("").is_err());
    }

    #[test]
    fn criterion_json_round_trips() {
        let criterion = BadgeCriterion::CountThreshold {
            action_type: ActionType::TourCreated,
            required_count: 1,
        };
        let json = serde_json::to_value(&criterion).unwrap();
        assert_eq!(json["kind"], "count_threshold");
        assert_eq!(json["action_type"], "TOUR_CREATED");
        assert_eq!(BadgeCriterion::from_json(&json).unwrap(), criterion);
    }

    #[test]
    fn dormant_criterion_kinds_round_trip() {
        let revenue = BadgeCriterion::RevenueThreshold {
            action_type: ActionType::BookingCreated,
            min_amount: 10_000,
        };
        let json = serde_json::to_value(&revenue).unwrap();
        assert_eq!(json["kind"], "revenue_threshold");
        assert_eq!(BadgeCriterion::from_json(&json).unwrap(), revenue);

        let rate = BadgeCriterion::RateThreshold {
            action_type: ActionType::ShipmentCreated,
            min_rate: 0.95,
            min_count: 50,
        };
        let json = serde_json::to_value(&rate).unwrap();
        assert_eq!(json["kind"], "rate_threshold");
        assert_eq!(BadgeCriterion::from_json(&json).unwrap(), rate);
    }

    #[test]
    fn malformed_criterion_is_rejected() {
        let json = serde_json::json!({ "kind": "count_threshold" });
        assert!(BadgeCriterion::from_json(&json).is_err());

        let json = serde_json::json!({ "tours_completed": 1 });
        assert!(BadgeCriterion::from_json(&json).is_err());
    }

    #[test]
    fn universal_badge_applies_everywhere() {
        for industry in Industry::ALL {
            assert!(badge_applies_to(None, *industry));
        }
        assert!(badge_applies_to(Some("tour"), Industry::TourManagement));
        assert!(!badge_applies_to(Some("tour"), Industry::TravelServices));
    }
}
