use axum::{extract::State, Json};

use crate::state::AppState;
use crate::templates::registry::TemplateSummary;

/// GET /api/v1/templates
pub async fn handle_list_templates(State(state): State<AppState>) -> Json<Vec<TemplateSummary>> {
    Json(state.templates.list())
}
