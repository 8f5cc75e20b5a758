pub mod admin;
pub mod auth;
pub mod gamification;
pub mod health;
pub mod industries;
pub mod logistics;
pub mod tours;
pub mod travel;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /industries                          list active industries (public)
///
/// /users/profile                       get, update own profile
///
/// /tours/packages                      list, create tour packages
/// /travel/bookings                     list bookings
/// /travel/bookings/flight              create flight booking
/// /travel/bookings/hotel               create hotel booking
/// /logistics/shipments                 list, create shipments
///
/// /gamification/progress               progress snapshot
/// /gamification/progress/update        record an action explicitly (POST)
/// /gamification/badges                 earned badges
/// /gamification/badges/available       badge catalog for the user's industry
/// /gamification/leaderboard            industry leaderboard
/// /gamification/achievements           achievement history
/// /gamification/stats                  aggregate statistics
///
/// /admin/badges/{id}/active            activate or retire a badge (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/industries", industries::router())
        .nest("/users", users::router())
        .nest("/tours", tours::router())
        .nest("/travel", travel::router())
        .nest("/logistics", logistics::router())
        .nest("/gamification", gamification::router())
        .nest("/admin", admin::router())
}
