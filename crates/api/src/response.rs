//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope per project conventions.
//! Domain-mutating endpoints additionally attach the gamification outcome so
//! clients can surface badge/achievement toasts without a second round trip.

use serde::Serialize;

use crate::engine::GamificationResult;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for create endpoints that also ran the gamification engine:
/// `{ "data": T, "gamification": { "achievements": [...], "badges": [...] } }`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub data: T,
    pub gamification: GamificationResult,
}
