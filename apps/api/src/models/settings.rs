use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginPreset {
    Compact,
    #[default]
    Normal,
    Spacious,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSizePreset {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhotoShape {
    #[default]
    Circle,
    Rounded,
    Square,
}

impl PhotoShape {
    /// CSS `border-radius` for the avatar image.
    pub fn border_radius(&self) -> &'static str {
        match self {
            PhotoShape::Circle => "50%",
            PhotoShape::Rounded => "12%",
            PhotoShape::Square => "0",
        }
    }
}

pub const DEFAULT_COLOR_SCHEME_ID: &str = "ocean";
pub const DEFAULT_FONT_FAMILY_ID: &str = "inter";
pub const DEFAULT_LINE_HEIGHT: f32 = 1.5;
pub const DEFAULT_LETTER_SPACING: f32 = 0.0;
pub const DEFAULT_PHOTO_SIZE: u32 = 100;

/// User style preferences. Read-only to templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    pub color_scheme_id: String,
    pub custom_primary_color: Option<String>,
    pub custom_accent_color: Option<String>,
    pub font_family_id: String,
    pub margin_preset: MarginPreset,
    pub font_size: FontSizePreset,
    pub line_height: f32,
    /// Extra tracking in px.
    pub letter_spacing: f32,
    /// Avatar edge length in px.
    pub photo_size: u32,
    pub photo_shape: PhotoShape,
    pub show_photo: bool,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            color_scheme_id: DEFAULT_COLOR_SCHEME_ID.to_string(),
            custom_primary_color: None,
            custom_accent_color: None,
            font_family_id: DEFAULT_FONT_FAMILY_ID.to_string(),
            margin_preset: MarginPreset::default(),
            font_size: FontSizePreset::default(),
            line_height: DEFAULT_LINE_HEIGHT,
            letter_spacing: DEFAULT_LETTER_SPACING,
            photo_size: DEFAULT_PHOTO_SIZE,
            photo_shape: PhotoShape::default(),
            show_photo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: TemplateSettings = serde_json::from_value(json!({
            "color_scheme_id": "forest",
            "margin_preset": "compact"
        }))
        .unwrap();
        assert_eq!(settings.color_scheme_id, "forest");
        assert_eq!(settings.margin_preset, MarginPreset::Compact);
        assert_eq!(settings.font_family_id, DEFAULT_FONT_FAMILY_ID);
        assert_eq!(settings.font_size, FontSizePreset::Medium);
        assert!(settings.show_photo);
    }

    #[test]
    fn test_unknown_margin_preset_is_rejected() {
        let result: Result<TemplateSettings, _> =
            serde_json::from_value(json!({ "margin_preset": "huge" }));
        assert!(result.is_err());
    }
}
