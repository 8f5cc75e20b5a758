//! Triport domain core.
//!
//! Pure domain logic shared by the data layer and the API server: ID and
//! timestamp aliases, the error taxonomy, the industry catalog, the
//! gamification vocabulary (action types, badge categories, criteria), and
//! the progress calculator. No I/O lives here.

pub mod error;
pub mod gamification;
pub mod industry;
pub mod progress;
pub mod roles;
pub mod types;
