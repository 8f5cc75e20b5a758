//! Completion-percentage calculator and point accounting rules.
//!
//! The calculator is a pure function of the user's current profile and
//! entity counts. It never touches storage; callers snapshot the counts and
//! pass them in. The returned percentage is always recomputed fresh and is
//! deliberately independent of the accumulated point total in
//! `user_progress` (the two can and do drift).

use serde::Serialize;

use crate::industry::Industry;

/// Flat points credited to `user_progress` for any recorded action.
pub const BASE_ACTION_POINTS: i64 = 10;

/// Points per level. Level 1 starts at 0 points; each further level takes
/// another 100 points.
pub const POINTS_PER_LEVEL: i64 = 100;

/// Snapshot of the counters the calculator consumes.
///
/// `profile_complete` means first name, last name, and phone are all set.
/// The entity counts reflect state after the triggering action has been
/// persisted, not a delta.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EntityCounts {
    pub profile_complete: bool,
    pub tour_packages: i64,
    pub travel_bookings: i64,
    pub shipments: i64,
}

/// Percentage granted to any user whose industry is unset or unrecognized,
/// for simply having a profile.
const BASELINE_PERCENTAGE: u8 = 10;

/// Compute the 0-100 completion percentage for a user within an industry.
///
/// Weights are additive and capped at 100. Thresholds are independent: a
/// later unmet threshold does not withhold an earlier met one.
pub fn completion_percentage(industry: Option<Industry>, counts: &EntityCounts) -> u8 {
    let progress: u32 = match industry {
        Some(Industry::TourManagement) => {
            let mut p = 0;
            if counts.profile_complete {
                p += 15;
            }
            if counts.tour_packages >= 1 {
                p += 30;
            }
            if counts.tour_packages >= 3 {
                p += 20;
            }
            if counts.tour_packages >= 5 {
                p += 35;
            }
            p
        }
        Some(Industry::TravelServices) => {
            let mut p = 0;
            if counts.profile_complete {
                p += 20;
            }
            if counts.travel_bookings >= 1 {
                p += 35;
            }
            if counts.travel_bookings >= 3 {
                p += 45;
            }
            p
        }
        Some(Industry::LogisticsShipping) => {
            let mut p = 0;
            if counts.profile_complete {
                p += 20;
            }
            if counts.shipments >= 1 {
                p += 40;
            }
            if counts.shipments >= 5 {
                p += 40;
            }
            p
        }
        Some(Industry::Other) | None => u32::from(BASELINE_PERCENTAGE),
    };

    progress.min(100) as u8
}

/// Level derived from an accumulated point total.
pub fn level_for_points(total_points: i64) -> i64 {
    total_points.max(0) / POINTS_PER_LEVEL + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(profile: bool, tours: i64, bookings: i64, shipments: i64) -> EntityCounts {
        EntityCounts {
            profile_complete: profile,
            tour_packages: tours,
            travel_bookings: bookings,
            shipments,
        }
    }

    #[test]
    fn empty_user_is_zero_for_recognized_industries() {
        let empty = EntityCounts::default();
        for industry in [
            Industry::TourManagement,
            Industry::TravelServices,
            Industry::LogisticsShipping,
        ] {
            assert_eq!(completion_percentage(Some(industry), &empty), 0);
        }
    }

    #[test]
    fn unaffiliated_user_gets_baseline() {
        let empty = EntityCounts::default();
        assert_eq!(completion_percentage(None, &empty), 10);
        assert_eq!(completion_percentage(Some(Industry::Other), &empty), 10);
    }

    #[test]
    fn tour_weights_accumulate() {
        let industry = Some(Industry::TourManagement);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 0)), 15);
        assert_eq!(completion_percentage(industry, &counts(true, 1, 0, 0)), 45);
        assert_eq!(completion_percentage(industry, &counts(true, 3, 0, 0)), 65);
        // 15 + 30 + 20 + 35 = 100 exactly at five packages.
        assert_eq!(completion_percentage(industry, &counts(true, 5, 0, 0)), 100);
        // Without the profile the cap keeps it under.
        assert_eq!(completion_percentage(industry, &counts(false, 5, 0, 0)), 85);
    }

    #[test]
    fn travel_weights_accumulate() {
        let industry = Some(Industry::TravelServices);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 0)), 20);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 1, 0)), 55);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 3, 0)), 100);
        assert_eq!(completion_percentage(industry, &counts(false, 0, 3, 0)), 80);
    }

    #[test]
    fn logistics_weights_accumulate() {
        let industry = Some(Industry::LogisticsShipping);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 0)), 20);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 1)), 60);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 4)), 60);
        assert_eq!(completion_percentage(industry, &counts(true, 0, 0, 5)), 100);
    }

    #[test]
    fn progress_is_monotonic_and_capped() {
        for industry in [
            Industry::TourManagement,
            Industry::TravelServices,
            Industry::LogisticsShipping,
            Industry::Other,
        ] {
            let mut last = 0;
            for n in 0..20 {
                let p = completion_percentage(Some(industry), &counts(true, n, n, n));
                assert!(p >= last, "{industry:?}: progress decreased at n={n}");
                assert!(p <= 100);
                last = p;
            }
        }
    }

    #[test]
    fn level_curve() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(10), 1);
        assert_eq!(level_for_points(99), 1);
        assert_eq!(level_for_points(100), 2);
        assert_eq!(level_for_points(1050), 11);
        // Defensive: a corrupt negative total still maps to level 1.
        assert_eq!(level_for_points(-5), 1);
    }
}
