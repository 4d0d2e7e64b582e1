// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API input validation tests.
//!
//! These run against an offline mock database: every case here must be
//! rejected before any store access happens.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_collection_paths_accept_trailing_slash() {
    let app = common::create_test_app();

    // The canonical Django-style URLs carry a trailing slash; both forms
    // must reach the handler (400 from validation, never a routing 404).
    for uri in ["/api/users", "/api/users/"] {
        let (status, body) = common::send(&app, "POST", uri, Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {}", uri);
        assert_eq!(body["error"], "validation_error");
    }
}

#[tokio::test]
async fn test_all_collection_routes_are_registered() {
    let app = common::create_test_app();

    for resource in ["users", "teams", "activities", "leaderboard", "workouts"] {
        for uri in [format!("/api/{}", resource), format!("/api/{}/", resource)] {
            let (status, _) = common::send(&app, "GET", &uri, None).await;
            assert_ne!(status, StatusCode::NOT_FOUND, "uri {}", uri);
        }
    }
}

#[tokio::test]
async fn test_user_missing_email_rejected() {
    let app = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/users/",
        Some(json!({ "name": "Iron Man", "team": "marvel" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_user_malformed_email_rejected() {
    let app = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/users/",
        Some(json!({ "name": "Iron Man", "email": "not-an-email", "team": "marvel" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().contains("email"));
}

#[tokio::test]
async fn test_activity_distance_must_be_numeric() {
    let app = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/activities/",
        Some(json!({
            "user": "ironman@marvel.com",
            "activity": "Running",
            "distance": "far",
            "date": "2024-05-01T10:00:00Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().starts_with("distance:"));
}

#[tokio::test]
async fn test_workout_reps_must_be_an_integer() {
    let app = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/workouts/",
        Some(json!({
            "user": "ironman@marvel.com",
            "workout": "Pushups",
            "reps": 10.5,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().starts_with("reps:"));
}

#[tokio::test]
async fn test_team_members_must_be_a_list() {
    let app = common::create_test_app();

    let (status, body) = common::send(
        &app,
        "POST",
        "/api/teams/",
        Some(json!({ "name": "marvel", "members": "ironman@marvel.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().starts_with("members:"));
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let app = common::create_test_app();

    let (status, body) = common::send(&app, "POST", "/api/users/", Some(json!([1, 2, 3]))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_validates_changed_fields() {
    let app = common::create_test_app();

    // Payload parsing happens before any store lookup
    let (status, body) = common::send(
        &app,
        "PUT",
        "/api/leaderboard/some-id/",
        Some(json!({ "points": "many" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].as_str().unwrap().starts_with("points:"));
}

#[tokio::test]
async fn test_validation_failure_reaches_no_store() {
    // The offline mock turns any store access into a 500, so a 400 here
    // proves nothing was persisted or even attempted.
    let app = common::create_test_app();

    let (status, _) = common::send(&app, "POST", "/api/leaderboard/", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
