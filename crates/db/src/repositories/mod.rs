//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod achievement_repo;
pub mod badge_repo;
pub mod industry_repo;
pub mod session_repo;
pub mod shipment_repo;
pub mod tour_package_repo;
pub mod travel_booking_repo;
pub mod user_badge_repo;
pub mod user_progress_repo;
pub mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use badge_repo::BadgeRepo;
pub use industry_repo::IndustryRepo;
pub use session_repo::SessionRepo;
pub use shipment_repo::ShipmentRepo;
pub use tour_package_repo::TourPackageRepo;
pub use travel_booking_repo::TravelBookingRepo;
pub use user_badge_repo::UserBadgeRepo;
pub use user_progress_repo::UserProgressRepo;
pub use user_repo::UserRepo;
