//! Team model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::resource::{field, object_body, required, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Team stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Document id (assigned on creation)
    pub id: String,
    /// Team name, unique across all teams
    pub name: String,
    /// Member emails, in join order
    pub members: Vec<String>,
    /// When the team was created (server-assigned)
    pub created_at: DateTime<Utc>,
}

/// Write payload for teams.
#[derive(Debug, Clone, Default)]
pub struct TeamPayload {
    pub name: Option<String>,
    pub members: Option<Vec<String>>,
}

impl Resource for Team {
    type Payload = TeamPayload;

    const COLLECTION: &'static str = collections::TEAMS;
    const UNIQUE_FIELD: Option<&'static str> = Some("name");

    fn parse_payload(body: &Value) -> Result<TeamPayload, AppError> {
        let body = object_body(body)?;
        Ok(TeamPayload {
            name: field(body, "name")?,
            members: field(body, "members")?,
        })
    }

    fn from_payload(
        id: String,
        payload: TeamPayload,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: required(payload.name, "name")?,
            // Original model defaults members to an empty list
            members: payload.members.unwrap_or_default(),
            created_at: now,
        })
    }

    fn replace_with(&mut self, payload: TeamPayload, _now: DateTime<Utc>) -> Result<(), AppError> {
        self.name = required(payload.name, "name")?;
        // members carries a model default, so it stays optional on PUT
        if let Some(members) = payload.members {
            self.members = members;
        }
        Ok(())
    }

    fn apply_payload(&mut self, payload: TeamPayload, _now: DateTime<Utc>) {
        if let Some(name) = payload.name {
            self.name = name;
        }
        if let Some(members) = payload.members {
            self.members = members;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.name)
    }
}
