// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::resource::{field, object_body, required, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logged activity record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Document id (assigned on creation)
    pub id: String,
    /// Owner's email (free-text reference)
    pub user: String,
    /// Activity kind (Running, Cycling, ...)
    pub activity: String,
    /// Distance covered
    pub distance: f64,
    /// When the activity took place (client-supplied)
    pub date: DateTime<Utc>,
    /// When the record was created (server-assigned)
    pub created_at: DateTime<Utc>,
}

/// Write payload for activities.
#[derive(Debug, Clone, Default)]
pub struct ActivityPayload {
    pub user: Option<String>,
    pub activity: Option<String>,
    pub distance: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl Resource for Activity {
    type Payload = ActivityPayload;

    const COLLECTION: &'static str = collections::ACTIVITIES;

    fn parse_payload(body: &Value) -> Result<ActivityPayload, AppError> {
        let body = object_body(body)?;
        Ok(ActivityPayload {
            user: field(body, "user")?,
            activity: field(body, "activity")?,
            distance: field(body, "distance")?,
            date: field(body, "date")?,
        })
    }

    fn from_payload(
        id: String,
        payload: ActivityPayload,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            user: required(payload.user, "user")?,
            activity: required(payload.activity, "activity")?,
            distance: required(payload.distance, "distance")?,
            date: required(payload.date, "date")?,
            created_at: now,
        })
    }

    fn replace_with(
        &mut self,
        payload: ActivityPayload,
        _now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.user = required(payload.user, "user")?;
        self.activity = required(payload.activity, "activity")?;
        self.distance = required(payload.distance, "distance")?;
        self.date = required(payload.date, "date")?;
        Ok(())
    }

    fn apply_payload(&mut self, payload: ActivityPayload, _now: DateTime<Utc>) {
        if let Some(user) = payload.user {
            self.user = user;
        }
        if let Some(activity) = payload.activity {
            self.activity = activity;
        }
        if let Some(distance) = payload.distance {
            self.distance = distance;
        }
        if let Some(date) = payload.date {
            self.date = date;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
