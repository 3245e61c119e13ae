//! CV document persistence.
//!
//! `AppState` carries an `Arc<dyn CvStore>`: `PgCvStore` in production,
//! `MemoryCvStore` in tests.

#[cfg(test)]
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
#[cfg(test)]
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{CvDocument, CvSection, PersonalInfo};
use crate::models::settings::TemplateSettings;
use crate::templates::DEFAULT_TEMPLATE_ID;

fn default_template_id() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

/// Full document body accepted by `PUT /api/v1/cv/:user_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CvDocumentInput {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub sections: Vec<CvSection>,
    #[serde(default)]
    pub settings: TemplateSettings,
    #[serde(default = "default_template_id")]
    pub template_id: String,
}

#[async_trait]
pub trait CvStore: Send + Sync {
    async fn get(&self, user_id: Uuid) -> Result<Option<CvDocument>, AppError>;

    /// Inserts or replaces the user's document.
    async fn upsert(&self, user_id: Uuid, input: &CvDocumentInput) -> Result<CvDocument, AppError>;

    /// Returns `None` when the user has no document yet.
    async fn update_settings(
        &self,
        user_id: Uuid,
        settings: &TemplateSettings,
    ) -> Result<Option<CvDocument>, AppError>;

    async fn update_template(
        &self,
        user_id: Uuid,
        template_id: &str,
    ) -> Result<Option<CvDocument>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Postgres
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, FromRow)]
struct CvDocumentRow {
    user_id: Uuid,
    personal_info: Json<PersonalInfo>,
    sections: Json<Vec<CvSection>>,
    settings: Json<TemplateSettings>,
    template_id: String,
    updated_at: DateTime<Utc>,
}

impl From<CvDocumentRow> for CvDocument {
    fn from(row: CvDocumentRow) -> Self {
        CvDocument {
            user_id: row.user_id,
            personal_info: row.personal_info.0,
            sections: row.sections.0,
            settings: row.settings.0,
            template_id: row.template_id,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgCvStore {
    pool: PgPool,
}

impl PgCvStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CvStore for PgCvStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<CvDocument>, AppError> {
        let row: Option<CvDocumentRow> =
            sqlx::query_as("SELECT * FROM cv_documents WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(CvDocument::from))
    }

    async fn upsert(&self, user_id: Uuid, input: &CvDocumentInput) -> Result<CvDocument, AppError> {
        let row: CvDocumentRow = sqlx::query_as(
            r#"
            INSERT INTO cv_documents
                (user_id, personal_info, sections, settings, template_id, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (user_id) DO UPDATE SET
                personal_info = EXCLUDED.personal_info,
                sections = EXCLUDED.sections,
                settings = EXCLUDED.settings,
                template_id = EXCLUDED.template_id,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(Json(&input.personal_info))
        .bind(Json(&input.sections))
        .bind(Json(&input.settings))
        .bind(&input.template_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::NotFound(format!("Profile {user_id} not found"))
            }
            other => AppError::Database(other),
        })?;
        Ok(row.into())
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        settings: &TemplateSettings,
    ) -> Result<Option<CvDocument>, AppError> {
        let row: Option<CvDocumentRow> = sqlx::query_as(
            "UPDATE cv_documents SET settings = $2, updated_at = NOW() WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(Json(settings))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CvDocument::from))
    }

    async fn update_template(
        &self,
        user_id: Uuid,
        template_id: &str,
    ) -> Result<Option<CvDocument>, AppError> {
        let row: Option<CvDocumentRow> = sqlx::query_as(
            "UPDATE cv_documents SET template_id = $2, updated_at = NOW() WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(template_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(CvDocument::from))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub struct MemoryCvStore {
    documents: RwLock<HashMap<Uuid, CvDocument>>,
}

#[cfg(test)]
impl MemoryCvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
#[async_trait]
impl CvStore for MemoryCvStore {
    async fn get(&self, user_id: Uuid) -> Result<Option<CvDocument>, AppError> {
        Ok(self.documents.read().await.get(&user_id).cloned())
    }

    async fn upsert(&self, user_id: Uuid, input: &CvDocumentInput) -> Result<CvDocument, AppError> {
        let document = CvDocument {
            user_id,
            personal_info: input.personal_info.clone(),
            sections: input.sections.clone(),
            settings: input.settings.clone(),
            template_id: input.template_id.clone(),
            updated_at: Utc::now(),
        };
        self.documents
            .write()
            .await
            .insert(user_id, document.clone());
        Ok(document)
    }

    async fn update_settings(
        &self,
        user_id: Uuid,
        settings: &TemplateSettings,
    ) -> Result<Option<CvDocument>, AppError> {
        let mut documents = self.documents.write().await;
        Ok(documents.get_mut(&user_id).map(|doc| {
            doc.settings = settings.clone();
            doc.updated_at = Utc::now();
            doc.clone()
        }))
    }

    async fn update_template(
        &self,
        user_id: Uuid,
        template_id: &str,
    ) -> Result<Option<CvDocument>, AppError> {
        let mut documents = self.documents.write().await;
        Ok(documents.get_mut(&user_id).map(|doc| {
            doc.template_id = template_id.to_string();
            doc.updated_at = Utc::now();
            doc.clone()
        }))
    }
}
