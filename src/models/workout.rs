//! Workout model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::resource::{field, object_body, required, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logged workout record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Document id (assigned on creation)
    pub id: String,
    /// Owner's email (free-text reference)
    pub user: String,
    /// Workout kind (Pushups, Squats, ...)
    pub workout: String,
    /// Repetition count
    pub reps: i64,
    /// When the record was created (server-assigned)
    pub created_at: DateTime<Utc>,
}

/// Write payload for workouts.
#[derive(Debug, Clone, Default)]
pub struct WorkoutPayload {
    pub user: Option<String>,
    pub workout: Option<String>,
    pub reps: Option<i64>,
}

impl Resource for Workout {
    type Payload = WorkoutPayload;

    const COLLECTION: &'static str = collections::WORKOUTS;

    fn parse_payload(body: &Value) -> Result<WorkoutPayload, AppError> {
        let body = object_body(body)?;
        Ok(WorkoutPayload {
            user: field(body, "user")?,
            workout: field(body, "workout")?,
            reps: field(body, "reps")?,
        })
    }

    fn from_payload(
        id: String,
        payload: WorkoutPayload,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            user: required(payload.user, "user")?,
            workout: required(payload.workout, "workout")?,
            reps: required(payload.reps, "reps")?,
            created_at: now,
        })
    }

    fn replace_with(
        &mut self,
        payload: WorkoutPayload,
        _now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.user = required(payload.user, "user")?;
        self.workout = required(payload.workout, "workout")?;
        self.reps = required(payload.reps, "reps")?;
        Ok(())
    }

    fn apply_payload(&mut self, payload: WorkoutPayload, _now: DateTime<Utc>) {
        if let Some(user) = payload.user {
            self.user = user;
        }
        if let Some(workout) = payload.workout {
            self.workout = workout;
        }
        if let Some(reps) = payload.reps {
            self.reps = reps;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
