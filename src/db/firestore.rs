// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed CRUD operations.
//!
//! All five resource collections go through the same generic operations,
//! parameterized by the [`Resource`] trait (collection name, unique-field
//! descriptor). Firestore has no unique field indexes, so uniqueness is
//! enforced by a duplicate query followed by a create-preconditioned
//! insert; the insert itself is atomic, so a violating write never leaves
//! a partial document behind.

use crate::error::AppError;
use crate::models::Resource;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Generic CRUD Operations ─────────────────────────────────

    /// List all records in a collection, store-native order.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(T::COLLECTION)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Get a record by document id.
    pub async fn get<T: Resource>(&self, id: &str) -> Result<Option<T>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(T::COLLECTION)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Insert a new record.
    ///
    /// Fails with [`AppError::Conflict`] if the resource declares a unique
    /// field and another document already holds the same value. The insert
    /// uses Firestore's create precondition, so re-using a document id also
    /// fails rather than silently overwriting.
    pub async fn create<T: Resource>(&self, record: &T) -> Result<(), AppError> {
        self.check_unique(record, None).await?;

        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(T::COLLECTION)
            .document_id(record.id())
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection = T::COLLECTION, id = record.id(), "Created document");
        Ok(())
    }

    /// Overwrite an existing record in place.
    ///
    /// The caller is responsible for having fetched the record first (and
    /// thus for 404 semantics); uniqueness is re-checked against every
    /// document other than the one being updated.
    pub async fn update<T: Resource>(&self, record: &T) -> Result<(), AppError> {
        self.check_unique(record, Some(record.id())).await?;

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(T::COLLECTION)
            .document_id(record.id())
            .object(record)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection = T::COLLECTION, id = record.id(), "Updated document");
        Ok(())
    }

    /// Delete a record by document id.
    pub async fn delete<T: Resource>(&self, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(T::COLLECTION)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection = T::COLLECTION, id, "Deleted document");
        Ok(())
    }

    // ─── Uniqueness Enforcement ──────────────────────────────────

    /// Reject the write if another document holds the record's unique value.
    async fn check_unique<T: Resource>(
        &self,
        record: &T,
        exclude_id: Option<&str>,
    ) -> Result<(), AppError> {
        let (field, value) = match (T::UNIQUE_FIELD, record.unique_value()) {
            (Some(field), Some(value)) => (field, value.to_string()),
            _ => return Ok(()),
        };

        let matches: Vec<T> = self
            .get_client()?
            .fluent()
            .select()
            .from(T::COLLECTION)
            .filter(move |q| q.field(field).eq(value.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let duplicate = matches
            .iter()
            .any(|other| exclude_id.is_none_or(|id| other.id() != id));

        if duplicate {
            return Err(AppError::Conflict(format!(
                "{} with {} '{}' already exists",
                T::COLLECTION,
                field,
                record.unique_value().unwrap_or_default()
            )));
        }

        Ok(())
    }
}
