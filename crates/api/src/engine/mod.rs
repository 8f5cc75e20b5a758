//! Gamification engine.
//!
//! Contains the badge evaluator that checks award criteria after every
//! domain action, plus the orchestrating service that credits points,
//! awards badges, records achievements, and serves progress reads.

pub mod evaluator;
pub mod service;

pub use service::{GamificationResult, GamificationService, ProgressSnapshot, UserStats};
