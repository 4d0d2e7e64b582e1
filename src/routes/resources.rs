// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generic CRUD handlers, instantiated once per resource type.
//!
//! Request bodies are taken as raw JSON and parsed through
//! [`Resource::parse_payload`] so that malformed fields come back as
//! 400s naming the field, rather than axum's default 422s.

use crate::error::{AppError, Result};
use crate::models::Resource;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Routes for one resource collection: list/create at the collection
/// path, retrieve/replace/update/delete at the id path. Paths are
/// registered in full (`/users`, `/users/`, `/users/{id}`, ...) because
/// the canonical Django-style URLs carry a trailing slash and a nested
/// `/` route does not match one.
pub fn resource_routes<T: Resource>() -> Router<Arc<AppState>> {
    let mut router = Router::new();

    for path in [
        format!("/{}", T::COLLECTION),
        format!("/{}/", T::COLLECTION),
    ] {
        router = router.route(&path, get(list::<T>).post(create::<T>));
    }

    for path in [
        format!("/{}/{{id}}", T::COLLECTION),
        format!("/{}/{{id}}/", T::COLLECTION),
    ] {
        router = router.route(
            &path,
            get(retrieve::<T>)
                .put(replace::<T>)
                .patch(update::<T>)
                .delete(destroy::<T>),
        );
    }

    router
}

fn not_found<T: Resource>(id: &str) -> AppError {
    AppError::NotFound(format!("{}: no record with id {}", T::COLLECTION, id))
}

/// List all records in the collection, store-native order.
async fn list<T: Resource>(State(state): State<Arc<AppState>>) -> Result<Json<Vec<T>>> {
    let records = state.db.list::<T>().await?;
    Ok(Json(records))
}

/// Retrieve one record by id.
async fn retrieve<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<T>> {
    let record = state
        .db
        .get::<T>(&id)
        .await?
        .ok_or_else(|| not_found::<T>(&id))?;
    Ok(Json(record))
}

/// Create a record: validate, assign id and server timestamps, insert.
async fn create<T: Resource>(
    State(state): State<Arc<AppState>>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<T>)> {
    let payload = T::parse_payload(&body)?;
    let record = T::from_payload(Uuid::new_v4().to_string(), payload, Utc::now())?;

    state.db.create(&record).await?;

    tracing::info!(collection = T::COLLECTION, id = record.id(), "Created record");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a record with a full payload (PUT); every create-required
/// field must be present again, while `id` and creation timestamps are
/// preserved. Existence is checked first, so an unknown id is a 404
/// even when the payload is incomplete.
async fn replace<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<T>> {
    let payload = T::parse_payload(&body)?;

    let mut record = state
        .db
        .get::<T>(&id)
        .await?
        .ok_or_else(|| not_found::<T>(&id))?;

    record.replace_with(payload, Utc::now())?;
    state.db.update(&record).await?;

    tracing::info!(collection = T::COLLECTION, id = record.id(), "Replaced record");
    Ok(Json(record))
}

/// Update a record with a partial payload (PATCH); absent fields keep
/// their stored values.
async fn update<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<T>> {
    let payload = T::parse_payload(&body)?;

    let mut record = state
        .db
        .get::<T>(&id)
        .await?
        .ok_or_else(|| not_found::<T>(&id))?;

    record.apply_payload(payload, Utc::now());
    state.db.update(&record).await?;

    tracing::info!(collection = T::COLLECTION, id = record.id(), "Updated record");
    Ok(Json(record))
}

/// Delete a record by id; 204 with no body on success.
async fn destroy<T: Resource>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.db.get::<T>(&id).await?.is_none() {
        return Err(not_found::<T>(&id));
    }

    state.db.delete::<T>(&id).await?;

    tracing::info!(collection = T::COLLECTION, id = %id, "Deleted record");
    Ok(StatusCode::NO_CONTENT)
}
