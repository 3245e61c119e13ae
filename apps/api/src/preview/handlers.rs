//! Axum route handlers for live and stored-document previews.

use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::admin::guard::CurrentUser;
use crate::cv::validation::{ensure_valid, validate_settings};
use crate::errors::AppError;
use crate::models::cv::{CvSection, PersonalInfo};
use crate::models::settings::TemplateSettings;
use crate::preview::renderer::{render_preview, PreviewInput};
use crate::state::AppState;
use crate::style::resolver::SettingsResolver;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub sections: Vec<CvSection>,
    #[serde(default)]
    pub settings: TemplateSettings,
    pub template_id: Option<String>,
    #[serde(default)]
    pub is_full_preview: bool,
    #[serde(default = "default_true")]
    pub mounted: bool,
}

#[derive(Debug, Deserialize)]
pub struct StoredPreviewQuery {
    #[serde(default)]
    pub full: bool,
    #[serde(default = "default_true")]
    pub mounted: bool,
}

/// POST /api/v1/preview
/// Stateless live preview of unsaved form data.
pub async fn handle_live_preview(
    State(state): State<AppState>,
    Json(req): Json<PreviewRequest>,
) -> Result<Html<String>, AppError> {
    ensure_valid(validate_settings(&req.settings))?;

    let input = PreviewInput {
        personal_info: &req.personal_info,
        sections: &req.sections,
        is_full_preview: req.is_full_preview,
    };
    let preview = render_preview(
        &input,
        &req.settings,
        req.template_id.as_deref(),
        &state.templates,
        &SettingsResolver::from_mount_flag(req.mounted),
    );
    Ok(Html(preview.html))
}

/// GET /api/v1/cv/:user_id/preview
pub async fn handle_stored_preview(
    State(state): State<AppState>,
    actor: CurrentUser,
    Path(user_id): Path<Uuid>,
    Query(query): Query<StoredPreviewQuery>,
) -> Result<Html<String>, AppError> {
    actor.ensure_owner(user_id)?;

    let document = state
        .documents
        .get(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("CV for user {user_id} not found")))?;

    let input = PreviewInput {
        personal_info: &document.personal_info,
        sections: &document.sections,
        is_full_preview: query.full,
    };
    let preview = render_preview(
        &input,
        &document.settings,
        Some(document.template_id.as_str()),
        &state.templates,
        &SettingsResolver::from_mount_flag(query.mounted),
    );
    if preview.template_id != document.template_id {
        tracing::info!(
            "Stored template '{}' for user {user_id} unavailable, rendered '{}'",
            document.template_id,
            preview.template_id
        );
    }
    Ok(Html(preview.html))
}
