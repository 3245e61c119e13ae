use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::admin::guard::CurrentUser;
use crate::cv::store::CvDocumentInput;
use crate::cv::validation::{ensure_valid, validate_document, validate_settings};
use crate::errors::AppError;
use crate::models::cv::CvDocument;
use crate::models::settings::TemplateSettings;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TemplateSelection {
    pub template_id: String,
}

fn missing_document(user_id: Uuid) -> AppError {
    AppError::NotFound(format!("CV for user {user_id} not found"))
}

/// GET /api/v1/cv/:user_id
pub async fn handle_get_document(
    State(state): State<AppState>,
    actor: CurrentUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<CvDocument>, AppError> {
    actor.ensure_owner(user_id)?;

    let document = state
        .documents
        .get(user_id)
        .await?
        .ok_or_else(|| missing_document(user_id))?;
    Ok(Json(document))
}

/// PUT /api/v1/cv/:user_id
pub async fn handle_put_document(
    State(state): State<AppState>,
    actor: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(input): Json<CvDocumentInput>,
) -> Result<Json<CvDocument>, AppError> {
    actor.ensure_owner(user_id)?;
    ensure_valid(validate_document(
        &input.personal_info,
        &input.sections,
        &input.settings,
    ))?;

    let document = state.documents.upsert(user_id, &input).await?;
    info!(
        "Saved CV for user {user_id} ({} sections, template '{}')",
        document.sections.len(),
        document.template_id
    );
    Ok(Json(document))
}

/// PUT /api/v1/cv/:user_id/settings
pub async fn handle_put_settings(
    State(state): State<AppState>,
    actor: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(settings): Json<TemplateSettings>,
) -> Result<Json<CvDocument>, AppError> {
    actor.ensure_owner(user_id)?;
    ensure_valid(validate_settings(&settings))?;

    let document = state
        .documents
        .update_settings(user_id, &settings)
        .await?
        .ok_or_else(|| missing_document(user_id))?;
    Ok(Json(document))
}

/// PUT /api/v1/cv/:user_id/template
/// Stored verbatim; ids unknown to the registry fall back at render time.
pub async fn handle_put_template(
    State(state): State<AppState>,
    actor: CurrentUser,
    Path(user_id): Path<Uuid>,
    Json(selection): Json<TemplateSelection>,
) -> Result<Json<CvDocument>, AppError> {
    actor.ensure_owner(user_id)?;

    let template_id = selection.template_id.trim();
    if !state.templates.contains(template_id) {
        info!("User {user_id} selected unregistered template '{template_id}'");
    }

    let document = state
        .documents
        .update_template(user_id, template_id)
        .await?
        .ok_or_else(|| missing_document(user_id))?;
    Ok(Json(document))
}
