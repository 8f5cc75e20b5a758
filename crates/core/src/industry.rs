//! The industry catalog.
//!
//! Industries are a fixed reference set seeded once at startup. A user's
//! industry affiliation scopes which dashboard routes and badges apply.
//! The slugs here are the `industries.id` primary keys written by the seed
//! routine in the data layer.

use serde::{Deserialize, Serialize};

/// A recognized industry vertical.
///
/// `Other` is a real catalog entry (the "general business" vertical), not a
/// parse failure. Unrecognized labels are handled by the caller via
/// [`Industry::from_label`] returning `None`; the progress calculator treats
/// that the same as an unaffiliated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Industry {
    TourManagement,
    TravelServices,
    LogisticsShipping,
    Other,
}

impl Industry {
    /// All seeded industries, in catalog order.
    pub const ALL: &'static [Industry] = &[
        Industry::TourManagement,
        Industry::TravelServices,
        Industry::LogisticsShipping,
        Industry::Other,
    ];

    /// The stable slug used as the `industries.id` primary key and as the
    /// `badges.industry` scoping value.
    pub fn slug(self) -> &'static str {
        match self {
            Industry::TourManagement => "tour",
            Industry::TravelServices => "travel",
            Industry::LogisticsShipping => "logistics",
            Industry::Other => "other",
        }
    }

    /// The human-readable display name used in API payloads and action
    /// metadata (e.g. `"Tour Management"`).
    pub fn display_name(self) -> &'static str {
        match self {
            Industry::TourManagement => "Tour Management",
            Industry::TravelServices => "Travel Services",
            Industry::LogisticsShipping => "Logistics & Shipping",
            Industry::Other => "Other Industries",
        }
    }

    /// Resolve an industry from either its slug or its display name,
    /// case-insensitively.
    ///
    /// Returns `None` for unrecognized labels. Callers that compute progress
    /// fall back to the baseline branch rather than erroring; callers that
    /// scope badge queries pass the slug through unchanged so universal
    /// badges still match.
    pub fn from_label(label: &str) -> Option<Industry> {
        let needle = label.trim().to_ascii_lowercase();
        Industry::ALL.iter().copied().find(|i| {
            i.slug() == needle || i.display_name().to_ascii_lowercase() == needle
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_round_trips() {
        for industry in Industry::ALL {
            assert_eq!(Industry::from_label(industry.slug()), Some(*industry));
        }
    }

    #[test]
    fn display_name_round_trips_case_insensitively() {
        assert_eq!(
            Industry::from_label("tour management"),
            Some(Industry::TourManagement)
        );
        assert_eq!(
            Industry::from_label("LOGISTICS & SHIPPING"),
            Some(Industry::LogisticsShipping)
        );
        assert_eq!(
            Industry::from_label("  Travel Services  "),
            Some(Industry::TravelServices)
        );
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(Industry::from_label("Agriculture"), None);
        assert_eq!(Industry::from_label(""), None);
    }
}
