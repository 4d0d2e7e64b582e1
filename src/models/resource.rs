// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The [`Resource`] trait: one CRUD contract shared by all five entities.
//!
//! Each entity supplies its collection name, an optional unique-field
//! descriptor, and how to build/mutate a record from a write payload.
//! Payloads are parsed field-by-field from raw JSON so that a mistyped
//! or missing field is reported by name; unknown fields are ignored.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

/// A record type stored in its own Firestore collection and exposed
/// through the uniform CRUD endpoints.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Validated write payload; every field optional so the same payload
    /// serves create (required fields checked in [`Resource::from_payload`])
    /// and partial update.
    type Payload: Send + 'static;

    /// Firestore collection name, also the URL path segment.
    const COLLECTION: &'static str;

    /// Field that must be unique across the collection, if any.
    const UNIQUE_FIELD: Option<&'static str> = None;

    /// Parse a write payload from a JSON body, reporting the failing
    /// field by name. Unknown fields are ignored.
    fn parse_payload(body: &Value) -> Result<Self::Payload, AppError>;

    /// Build a new record from a payload; all required fields must be
    /// present. Server-assigned timestamps are taken from `now`.
    fn from_payload(id: String, payload: Self::Payload, now: DateTime<Utc>)
        -> Result<Self, AppError>;

    /// Replace an existing record with a full payload (PUT). Every
    /// create-required field must be present again; `id` and
    /// server-assigned creation timestamps are preserved.
    fn replace_with(&mut self, payload: Self::Payload, now: DateTime<Utc>)
        -> Result<(), AppError>;

    /// Apply a partial payload to an existing record (PATCH). Fields not
    /// present in the payload keep their stored values; server-assigned
    /// creation timestamps are never altered.
    fn apply_payload(&mut self, payload: Self::Payload, now: DateTime<Utc>);

    /// Document id (assigned at creation, immutable).
    fn id(&self) -> &str;

    /// Current value of the unique field, if the entity declares one.
    fn unique_value(&self) -> Option<&str> {
        None
    }
}

/// Require the body to be a JSON object.
pub(crate) fn object_body(body: &Value) -> Result<&Map<String, Value>, AppError> {
    body.as_object()
        .ok_or_else(|| AppError::Validation("request body must be a JSON object".to_string()))
}

/// Extract an optional field, failing with the field name if the value
/// does not deserialize as the declared type.
pub(crate) fn field<V: DeserializeOwned>(
    body: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<V>, AppError> {
    match body.get(name) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|err| AppError::Validation(format!("{}: {}", name, err))),
    }
}

/// Unwrap a required field, naming it in the error when absent.
pub(crate) fn required<V>(value: Option<V>, name: &'static str) -> Result<V, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("{}: this field is required", name)))
}
