use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::GamificationService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: triport_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Gamification engine over the same pool.
    pub gamification: GamificationService,
}
