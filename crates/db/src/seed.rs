//! Startup seed data: the industry catalog and the badge definitions.
//!
//! Both routines are idempotent and run on every boot after migrations.
//! Industries insert-or-skip on their slug id; badges upsert on their unique
//! name so criterion or point tweaks roll out without touching earned awards.

use sqlx::PgPool;
use triport_core::gamification::{ActionType, BadgeCategory, BadgeCriterion};
use triport_core::industry::Industry;

use crate::models::badge::BadgeDefinition;
use crate::repositories::BadgeRepo;

/// Catalog description per industry, keyed by slug order of [`Industry::ALL`].
fn industry_description(industry: Industry) -> &'static str {
    match industry {
        Industry::TourManagement => {
            "Complete tour package management with booking, customer management, and itinerary planning"
        }
        Industry::TravelServices => {
            "Travel services including flight and hotel booking, trip planning, and customer management"
        }
        Industry::LogisticsShipping => {
            "Logistics management with shipment tracking, route optimization, and delivery scheduling"
        }
        Industry::Other => "General business management adaptable to various industries",
    }
}

/// Insert any missing industries. Existing rows are left untouched.
pub async fn seed_industries(pool: &PgPool) -> Result<(), sqlx::Error> {
    for industry in Industry::ALL {
        let inserted = sqlx::query(
            "INSERT INTO industries (id, name, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(industry.slug())
        .bind(industry.display_name())
        .bind(industry_description(*industry))
        .execute(pool)
        .await?;

        if inserted.rows_affected() > 0 {
            tracing::info!(industry = industry.slug(), "Seeded industry");
        }
    }
    Ok(())
}

/// The shipped badge catalog.
///
/// Count-threshold badges are live; the rating, streak, revenue, and rate
/// entries are catalog-visible but dormant until their source data exists
/// (the award engine reports them unsupported).
fn badge_definitions() -> Vec<BadgeDefinition> {
    use ActionType::*;
    use BadgeCategory::*;

    vec![
        // -- Universal --
        BadgeDefinition {
            name: "Profile Complete",
            description: "Fill in your first name, last name, and phone number",
            category: Completion,
            industry: None,
            criterion: BadgeCriterion::CountThreshold {
                action_type: ProfileCompleted,
                required_count: 1,
            },
            icon_url: "/badges/profile-complete.svg",
            points: 25,
        },
        // -- Tour Management --
        BadgeDefinition {
            name: "Tour Guide Rookie",
            description: "Create your first tour package",
            category: Achievement,
            industry: Some("tour"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: TourCreated,
                required_count: 1,
            },
            icon_url: "/badges/tour-rookie.svg",
            points: 50,
        },
        BadgeDefinition {
            name: "Explorer",
            description: "Create 5 tour packages",
            category: Achievement,
            industry: Some("tour"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: TourCreated,
                required_count: 5,
            },
            icon_url: "/badges/explorer.svg",
            points: 100,
        },
        BadgeDefinition {
            name: "Adventure Master",
            description: "Create 25 tour packages",
            category: Milestone,
            industry: Some("tour"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: TourCreated,
                required_count: 25,
            },
            icon_url: "/badges/adventure-master.svg",
            points: 250,
        },
        BadgeDefinition {
            name: "Customer Champion",
            description: "Achieve a 4.8+ average rating across 10 reviews",
            category: Special,
            industry: Some("tour"),
            criterion: BadgeCriterion::RatingThreshold {
                action_type: TourCreated,
                min_rating: 4.8,
                min_reviews: 10,
            },
            icon_url: "/badges/champion.svg",
            points: 150,
        },
        BadgeDefinition {
            name: "30-Day Tour Streak",
            description: "Create tours on 30 consecutive days",
            category: Special,
            industry: Some("tour"),
            criterion: BadgeCriterion::Streak {
                action_type: TourCreated,
                consecutive_days: 30,
            },
            icon_url: "/badges/streak-30.svg",
            points: 200,
        },
        // -- Travel Services --
        BadgeDefinition {
            name: "Travel Planner",
            description: "Complete your first travel booking",
            category: Achievement,
            industry: Some("travel"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: BookingCreated,
                required_count: 1,
            },
            icon_url: "/badges/travel-planner.svg",
            points: 50,
        },
        BadgeDefinition {
            name: "Jet Setter",
            description: "Complete 10 travel bookings",
            category: Milestone,
            industry: Some("travel"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: BookingCreated,
                required_count: 10,
            },
            icon_url: "/badges/jet-setter.svg",
            points: 150,
        },
        BadgeDefinition {
            name: "Globe Trotter",
            description: "Complete 15 travel bookings",
            category: Milestone,
            industry: Some("travel"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: BookingCreated,
                required_count: 15,
            },
            icon_url: "/badges/globe-trotter.svg",
            points: 300,
        },
        BadgeDefinition {
            name: "Quick Booker",
            description: "Complete 5 travel bookings",
            category: Special,
            industry: Some("travel"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: BookingCreated,
                required_count: 5,
            },
            icon_url: "/badges/quick-booker.svg",
            points: 100,
        },
        BadgeDefinition {
            name: "VIP Agent",
            description: "Handle premium bookings worth $10,000+",
            category: Revenue,
            industry: Some("travel"),
            criterion: BadgeCriterion::RevenueThreshold {
                action_type: BookingCreated,
                min_amount: 10_000,
            },
            icon_url: "/badges/vip-agent.svg",
            points: 250,
        },
        // -- Logistics & Shipping --
        BadgeDefinition {
            name: "Delivery Rookie",
            description: "Create your first shipment",
            category: Achievement,
            industry: Some("logistics"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: ShipmentCreated,
                required_count: 1,
            },
            icon_url: "/badges/delivery-rookie.svg",
            points: 50,
        },
        BadgeDefinition {
            name: "Speed Demon",
            description: "Create 20 shipments",
            category: Special,
            industry: Some("logistics"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: ShipmentCreated,
                required_count: 20,
            },
            icon_url: "/badges/speed-demon.svg",
            points: 120,
        },
        BadgeDefinition {
            name: "Cargo Master",
            description: "Handle 100 shipments",
            category: Milestone,
            industry: Some("logistics"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: ShipmentCreated,
                required_count: 100,
            },
            icon_url: "/badges/cargo-master.svg",
            points: 200,
        },
        BadgeDefinition {
            name: "On-Time Hero",
            description: "Maintain a 95% on-time delivery rate over 50 deliveries",
            category: Special,
            industry: Some("logistics"),
            criterion: BadgeCriterion::RateThreshold {
                action_type: ShipmentCreated,
                min_rate: 0.95,
                min_count: 50,
            },
            icon_url: "/badges/on-time-hero.svg",
            points: 180,
        },
        BadgeDefinition {
            name: "Long Haul Champion",
            description: "Complete 10 long-haul shipments",
            category: Milestone,
            industry: Some("logistics"),
            criterion: BadgeCriterion::CountThreshold {
                action_type: ShipmentCreated,
                required_count: 10,
            },
            icon_url: "/badges/long-haul.svg",
            points: 160,
        },
    ]
}

/// Upsert the badge catalog.
pub async fn seed_badges(pool: &PgPool) -> Result<(), sqlx::Error> {
    let definitions = badge_definitions();
    let count = definitions.len();
    for def in &definitions {
        BadgeRepo::upsert_definition(pool, def).await?;
    }
    tracing::info!(count, "Badge catalog seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_carries_the_full_shipped_badge_set() {
        let names: Vec<_> = badge_definitions().iter().map(|d| d.name).collect();
        for expected in [
            "Profile Complete",
            "Tour Guide Rookie",
            "Explorer",
            "Adventure Master",
            "Customer Champion",
            "30-Day Tour Streak",
            "Travel Planner",
            "Jet Setter",
            "Globe Trotter",
            "Quick Booker",
            "VIP Agent",
            "Delivery Rookie",
            "Speed Demon",
            "Cargo Master",
            "On-Time Hero",
            "Long Haul Champion",
        ] {
            assert!(names.contains(&expected), "missing badge: {expected}");
        }
        assert_eq!(names.len(), 16);
    }

    #[test]
    fn catalog_names_are_unique() {
        let defs = badge_definitions();
        let mut names: Vec<_> = defs.iter().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), defs.len(), "duplicate badge name in catalog");
    }

    #[test]
    fn catalog_industries_are_known_slugs() {
        for def in badge_definitions() {
            if let Some(slug) = def.industry {
                assert!(
                    Industry::from_label(slug).is_some(),
                    "badge '{}' references unknown industry '{slug}'",
                    def.name
                );
            }
        }
    }

    #[test]
    fn catalog_criteria_serialize_round_trip() {
        for def in badge_definitions() {
            let json = serde_json::to_value(&def.criterion).unwrap();
            let parsed = BadgeCriterion::from_json(&json).unwrap();
            assert_eq!(parsed, def.criterion);
        }
    }
}
