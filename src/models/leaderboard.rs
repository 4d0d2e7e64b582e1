//! Leaderboard entry model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::resource::{field, object_body, required, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Team score entry in Firestore. Points are maintained by clients;
/// there is no automatic aggregation from activities or workouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Document id (assigned on creation)
    pub id: String,
    /// Team name, unique across the leaderboard
    pub team: String,
    /// Current score
    pub points: i64,
    /// Refreshed on every update (server-assigned)
    pub updated_at: DateTime<Utc>,
}

/// Write payload for leaderboard entries.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardPayload {
    pub team: Option<String>,
    pub points: Option<i64>,
}

impl Resource for Leaderboard {
    type Payload = LeaderboardPayload;

    const COLLECTION: &'static str = collections::LEADERBOARD;
    const UNIQUE_FIELD: Option<&'static str> = Some("team");

    fn parse_payload(body: &Value) -> Result<LeaderboardPayload, AppError> {
        let body = object_body(body)?;
        Ok(LeaderboardPayload {
            team: field(body, "team")?,
            points: field(body, "points")?,
        })
    }

    fn from_payload(
        id: String,
        payload: LeaderboardPayload,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            team: required(payload.team, "team")?,
            points: required(payload.points, "points")?,
            updated_at: now,
        })
    }

    fn replace_with(
        &mut self,
        payload: LeaderboardPayload,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        self.team = required(payload.team, "team")?;
        self.points = required(payload.points, "points")?;
        self.updated_at = now;
        Ok(())
    }

    fn apply_payload(&mut self, payload: LeaderboardPayload, now: DateTime<Utc>) {
        if let Some(team) = payload.team {
            self.team = team;
        }
        if let Some(points) = payload.points {
            self.points = points;
        }
        // Refreshed on every update, even a no-op one
        self.updated_at = now;
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.team)
    }
}
