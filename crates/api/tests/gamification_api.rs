//! HTTP-level integration tests for the gamification engine.
//!
//! Exercises the full path: domain action -> point credit -> badge
//! evaluation -> achievement log -> progress/leaderboard reads.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, put_json_auth, register_user};
use sqlx::PgPool;
use triport_db::repositories::UserProgressRepo;

/// Creating a first tour package awards the entry badge and credits points.
#[sqlx::test(migrations = "../../db/migrations")]
async fn first_tour_package_awards_rookie_badge(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "guide@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();
    let user_id = auth["user"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "name": "Sunset Safari", "destination": "Serengeti" });
    let response = post_json_auth(app, "/api/v1/tours/packages", body, token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Sunset Safari");

    let badges = json["gamification"]["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1, "exactly one badge on the first package");
    assert_eq!(badges[0]["name"], "Tour Guide Rookie");

    let achievements = json["gamification"]["achievements"].as_array().unwrap();
    assert_eq!(achievements.len(), 1);
    assert_eq!(achievements[0]["achievement_type"], "MILESTONE_REACHED");

    // Base action points were credited.
    let progress = UserProgressRepo::find_for_user(&pool, user_id)
        .await
        .expect("progress read should succeed");
    assert_matches!(progress, Some(ref p) if p.total_points == 10 && p.current_level == 1);
}

/// A second package earns no new badge; awarding is once per badge.
#[sqlx::test(migrations = "../../db/migrations")]
async fn badges_are_awarded_at_most_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "repeat@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    for name in ["First", "Second"] {
        let app = common::build_test_app(pool.clone()).await;
        let body = serde_json::json!({ "name": name });
        let response = post_json_auth(app, "/api/v1/tours/packages", body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        let badges = json["gamification"]["badges"].as_array().unwrap();
        if name == "First" {
            assert_eq!(badges.len(), 1);
        } else {
            assert!(badges.is_empty(), "no badge on the second package");
        }
    }

    // The earned list still holds exactly one badge.
    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/badges", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// The progress snapshot recomputes the completion percentage from live
/// entity counts using the tour industry weights.
#[sqlx::test(migrations = "../../db/migrations")]
async fn progress_percentage_follows_tour_weights(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "pct@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    // No phone yet, so the profile is incomplete: one package is worth 30.
    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "name": "Alpine Trek" });
    post_json_auth(app, "/api/v1/tours/packages", body, token).await;

    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(app, "/api/v1/gamification/progress", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["completion_percentage"], 30);
    assert_eq!(json["data"]["industry"], "tour");
    assert_eq!(json["data"]["total_points"], 10);
    assert_eq!(json["data"]["counts"]["tour_packages"], 1);

    // Completing the profile lifts it to 45 (15 + 30).
    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "phone": "+15550100" });
    put_json_auth(app, "/api/v1/users/profile", body, token).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/progress", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["completion_percentage"], 45);
}

/// Completing the profile fires PROFILE_COMPLETED exactly once and awards
/// the universal badge.
#[sqlx::test(migrations = "../../db/migrations")]
async fn profile_completion_awards_universal_badge_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "prof@example.com", "strong-password", Some("logistics")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "phone": "+15550101" });
    let response = put_json_auth(app, "/api/v1/users/profile", body, token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let badges = json["gamification"]["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0]["name"], "Profile Complete");

    // A second no-op update does not fire the action again.
    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "phone": "+15550102" });
    let response = put_json_auth(app, "/api/v1/users/profile", body, token).await;
    let json = body_json(response).await;
    assert!(json["gamification"]["badges"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/badges", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

/// Flight and hotel bookings share the BOOKING_CREATED action.
#[sqlx::test(migrations = "../../db/migrations")]
async fn bookings_drive_travel_badges(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "agent@example.com", "strong-password", Some("travel")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "customer_name": "R. Achebe" });
    let response = post_json_auth(app, "/api/v1/travel/bookings/flight", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["booking_type"], "flight");
    let badges = json["gamification"]["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0]["name"], "Travel Planner");

    // A hotel booking counts toward the same action; no new badge at 2.
    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "customer_name": "R. Achebe" });
    let response = post_json_auth(app, "/api/v1/travel/bookings/hotel", body, token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["booking_type"], "hotel");
    assert!(json["gamification"]["badges"].as_array().unwrap().is_empty());

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/travel/bookings", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// A booking whose end date precedes its start date is rejected.
#[sqlx::test(migrations = "../../db/migrations")]
async fn booking_date_order_is_validated(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "dates@example.com", "strong-password", Some("travel")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({
        "customer_name": "B. Traven",
        "start_date": "2026-09-10T00:00:00Z",
        "end_date": "2026-09-05T00:00:00Z",
    });
    let response = post_json_auth(app, "/api/v1/travel/bookings/hotel", body, token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The first shipment awards the logistics entry badge.
#[sqlx::test(migrations = "../../db/migrations")]
async fn first_shipment_awards_delivery_rookie(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "ship@example.com", "strong-password", Some("logistics")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "origin": "Lagos", "destination": "Accra" });
    let response = post_json_auth(app, "/api/v1/logistics/shipments", body, token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    let badges = json["gamification"]["badges"].as_array().unwrap();
    assert_eq!(badges.len(), 1);
    assert_eq!(badges[0]["name"], "Delivery Rookie");
}

/// The available-badge catalog for a tour user holds universal plus
/// tour-scoped badges, and nothing from other industries.
#[sqlx::test(migrations = "../../db/migrations")]
async fn available_badges_are_industry_scoped(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "catalog@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/badges/available", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let badges = json["data"].as_array().unwrap();
    assert!(!badges.is_empty());
    for badge in badges {
        let industry = &badge["industry"];
        assert!(
            industry.is_null() || industry == "tour",
            "unexpected industry in catalog: {industry}"
        );
    }
    let names: Vec<&str> = badges.iter().map(|b| b["name"].as_str().unwrap()).collect();
    assert!(names.contains(&"Tour Guide Rookie"));
    assert!(names.contains(&"Profile Complete"));
    assert!(!names.contains(&"Delivery Rookie"));
}

/// Switching industry via the profile rescopes the catalog immediately, even
/// for an access token minted before the change.
#[sqlx::test(migrations = "../../db/migrations")]
async fn industry_change_rescopes_catalog_immediately(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "mover@example.com", "strong-password", Some("travel")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "industry_id": "logistics" });
    let response = put_json_auth(app, "/api/v1/users/profile", body, token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/badges/available", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Delivery Rookie"), "new industry applies");
    assert!(!names.contains(&"Travel Planner"), "old industry is gone");
}

/// The leaderboard ranks industry peers by achievement points earned within
/// the period window.
#[sqlx::test(migrations = "../../db/migrations")]
async fn leaderboard_ranks_by_achievement_points(pool: PgPool) {
    // Two tour users; only the first earns a badge (50-point achievement).
    let app = common::build_test_app(pool.clone()).await;
    let winner = register_user(app, "winner@example.com", "strong-password", Some("tour")).await;
    let winner_token = winner["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    register_user(app, "idle@example.com", "strong-password", Some("tour")).await;

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "name": "City Lights" });
    post_json_auth(app, "/api/v1/tours/packages", body, winner_token).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(
        app,
        "/api/v1/gamification/leaderboard?period=WEEKLY&limit=10",
        winner_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1, "only users with achievements are ranked");
    assert_eq!(entries[0]["email"], "winner@example.com");
    assert_eq!(entries[0]["score"], 50);
}

/// Unknown period and action-type strings are rejected at the boundary.
#[sqlx::test(migrations = "../../db/migrations")]
async fn enum_boundaries_reject_unknown_values(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "bounds@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = get_auth(
        app,
        "/api/v1/gamification/leaderboard?period=DAILY",
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "action_type": "INVOICE_SENT" });
    let response = post_json_auth(app, "/api/v1/gamification/progress/update", body, token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An explicit progress update records points even when no badge fires.
#[sqlx::test(migrations = "../../db/migrations")]
async fn explicit_progress_update_credits_points(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "manual@example.com", "strong-password", None).await;
    let token = auth["access_token"].as_str().unwrap();
    let user_id = auth["user"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "action_type": "TOUR_CREATED" });
    let response = post_json_auth(app, "/api/v1/gamification/progress/update", body, token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // No tour rows exist, so no badge can fire; the points still land.
    assert!(json["data"]["badges"].as_array().unwrap().is_empty());

    let progress = UserProgressRepo::find_for_user(&pool, user_id)
        .await
        .expect("progress read should succeed");
    assert_matches!(progress, Some(ref p) if p.total_points == 10);
}

/// A retired badge is skipped by the evaluator.
#[sqlx::test(migrations = "../../db/migrations")]
async fn retired_badges_are_not_awarded(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "retired@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    let badge_id: i64 = sqlx::query_scalar("SELECT id FROM badges WHERE name = $1")
        .bind("Tour Guide Rookie")
        .fetch_one(&pool)
        .await
        .expect("seeded badge should exist");
    triport_db::repositories::BadgeRepo::set_active(&pool, badge_id, false)
        .await
        .expect("retire should succeed");

    let app = common::build_test_app(pool).await;
    let body = serde_json::json!({ "name": "Night Market" });
    let response = post_json_auth(app, "/api/v1/tours/packages", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["gamification"]["badges"].as_array().unwrap().is_empty());
    assert!(json["gamification"]["achievements"].as_array().unwrap().is_empty());
}

/// Stats aggregate points, level, badge and achievement counts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_aggregate_engine_outputs(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let auth = register_user(app, "stats@example.com", "strong-password", Some("tour")).await;
    let token = auth["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let body = serde_json::json!({ "name": "Harbor Walk" });
    post_json_auth(app, "/api/v1/tours/packages", body, token).await;

    let app = common::build_test_app(pool).await;
    let response = get_auth(app, "/api/v1/gamification/stats", token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total_points"], 10);
    assert_eq!(json["data"]["current_level"], 1);
    assert_eq!(json["data"]["badges_earned"], 1);
    assert_eq!(json["data"]["total_achievements"], 1);
    assert_eq!(json["data"]["completion_percentage"], 30);
}
