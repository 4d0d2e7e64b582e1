// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod resources;

use crate::models::{Activity, Leaderboard, Team, User, Workout};
use crate::AppState;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method};
use axum::{middleware, routing::get, Json, Router};
use resources::resource_routes;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// The five exposed resources, in root-index order.
const RESOURCES: [&str; 5] = ["users", "teams", "activities", "leaderboard", "workouts"];

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
    })
}

/// Root index: maps each resource name to its collection URL.
///
/// The base URL comes from the configured override when present,
/// otherwise from the request's Host header (scheme from
/// X-Forwarded-Proto, defaulting to http). Purely informational.
async fn api_root(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<BTreeMap<String, String>> {
    let base = match &state.config.base_url_override {
        Some(base) => base.clone(),
        None => {
            let host = headers
                .get(header::HOST)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("localhost");
            let scheme = headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("http");
            format!("{}://{}", scheme, host)
        }
    };

    let index = RESOURCES
        .iter()
        .map(|name| (name.to_string(), format!("{}/api/{}/", base, name)))
        .collect();

    Json(index)
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Browser clients (the OctoFit frontend) call this API cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let api = Router::new()
        .merge(resource_routes::<User>())
        .merge(resource_routes::<Team>())
        .merge(resource_routes::<Activity>())
        .merge(resource_routes::<Leaderboard>())
        .merge(resource_routes::<Workout>());

    Router::new()
        .route("/", get(api_root))
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(middleware::from_fn(
            crate::middleware::security::add_security_headers,
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
