//! Axum route handlers for the style catalogue and settings resolution.

use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use crate::cv::validation::{ensure_valid, validate_settings};
use crate::errors::AppError;
use crate::models::settings::TemplateSettings;
use crate::style::fonts::{FontFamily, FONT_FAMILIES};
use crate::style::palette::{ColorScheme, COLOR_SCHEMES};
use crate::style::resolver::SettingsResolver;
use crate::style::tokens::StyleTokens;

#[derive(Debug, Deserialize)]
pub struct MountQuery {
    /// `false` during a server pre-render pass, before the client has mounted.
    #[serde(default = "default_mounted")]
    pub mounted: bool,
}

fn default_mounted() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct CssVariable {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ResolvedStyleResponse {
    pub tokens: StyleTokens,
    pub css_variables: Vec<CssVariable>,
    pub style: String,
}

/// GET /api/v1/style/color-schemes
pub async fn handle_list_color_schemes() -> Json<&'static [ColorScheme]> {
    Json(COLOR_SCHEMES)
}

/// GET /api/v1/style/fonts
pub async fn handle_list_fonts() -> Json<&'static [FontFamily]> {
    Json(FONT_FAMILIES)
}

/// POST /api/v1/style/resolve
/// The returned `style` is ready to apply, so settings are validated first.
pub async fn handle_resolve(
    Query(query): Query<MountQuery>,
    Json(settings): Json<TemplateSettings>,
) -> Result<Json<ResolvedStyleResponse>, AppError> {
    ensure_valid(validate_settings(&settings))?;

    let tokens = SettingsResolver::from_mount_flag(query.mounted).resolve(&settings);
    let css_variables = tokens
        .css_variables()
        .into_iter()
        .map(|(name, value)| CssVariable { name, value })
        .collect();
    let style = tokens.style_attribute();
    Ok(Json(ResolvedStyleResponse {
        tokens,
        css_variables,
        style,
    }))
}
