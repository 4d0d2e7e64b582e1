//! User model for storage and API.

use crate::db::collections;
use crate::error::AppError;
use crate::models::resource::{field, object_body, required, Resource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidateEmail;

/// Fitness app user stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Document id (assigned on creation)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address, unique across all users
    pub email: String,
    /// Team name (free-text reference)
    pub team: String,
    /// When the user was created (server-assigned, immutable)
    pub created_at: DateTime<Utc>,
}

/// Write payload for users.
#[derive(Debug, Clone, Default)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub team: Option<String>,
}

impl Resource for User {
    type Payload = UserPayload;

    const COLLECTION: &'static str = collections::USERS;
    const UNIQUE_FIELD: Option<&'static str> = Some("email");

    fn parse_payload(body: &Value) -> Result<UserPayload, AppError> {
        let body = object_body(body)?;
        let payload = UserPayload {
            name: field(body, "name")?,
            email: field(body, "email")?,
            team: field(body, "team")?,
        };

        if let Some(email) = &payload.email {
            if !email.validate_email() {
                return Err(AppError::Validation(
                    "email: not a valid email address".to_string(),
                ));
            }
        }

        Ok(payload)
    }

    fn from_payload(
        id: String,
        payload: UserPayload,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: required(payload.name, "name")?,
            email: required(payload.email, "email")?,
            team: required(payload.team, "team")?,
            created_at: now,
        })
    }

    fn replace_with(&mut self, payload: UserPayload, _now: DateTime<Utc>) -> Result<(), AppError> {
        self.name = required(payload.name, "name")?;
        self.email = required(payload.email, "email")?;
        self.team = required(payload.team, "team")?;
        Ok(())
    }

    fn apply_payload(&mut self, payload: UserPayload, _now: DateTime<Utc>) {
        if let Some(name) = payload.name {
            self.name = name;
        }
        if let Some(email) = payload.email {
            self.email = email;
        }
        if let Some(team) = payload.team {
            self.team = team;
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn unique_value(&self) -> Option<&str> {
        Some(&self.email)
    }
}
