use std::collections::HashSet;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::cv::{CvSection, PersonalInfo};
use crate::models::settings::TemplateSettings;

pub const MAX_NAME_LEN: usize = 200;
pub const LINE_HEIGHT_RANGE: (f32, f32) = (1.0, 2.5);
pub const LETTER_SPACING_RANGE: (f32, f32) = (-2.0, 5.0);
pub const PHOTO_SIZE_RANGE: (u32, u32) = (40, 240);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// `#rgb` or `#rrggbb`.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Checks user style overrides. These values end up inside a `style`
/// attribute, so colours are held to a strict format.
pub fn validate_settings(settings: &TemplateSettings) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for (field, value) in [
        ("settings.custom_primary_color", &settings.custom_primary_color),
        ("settings.custom_accent_color", &settings.custom_accent_color),
    ] {
        if let Some(color) = value {
            if !is_hex_color(color) {
                issues.push(ValidationIssue::new(
                    field,
                    format!("'{color}' is not a #rgb or #rrggbb colour"),
                ));
            }
        }
    }

    let (lo, hi) = LINE_HEIGHT_RANGE;
    if !(lo..=hi).contains(&settings.line_height) {
        issues.push(ValidationIssue::new(
            "settings.line_height",
            format!("must be between {lo} and {hi}"),
        ));
    }

    let (lo, hi) = LETTER_SPACING_RANGE;
    if !(lo..=hi).contains(&settings.letter_spacing) {
        issues.push(ValidationIssue::new(
            "settings.letter_spacing",
            format!("must be between {lo} and {hi} px"),
        ));
    }

    let (lo, hi) = PHOTO_SIZE_RANGE;
    if !(lo..=hi).contains(&settings.photo_size) {
        issues.push(ValidationIssue::new(
            "settings.photo_size",
            format!("must be between {lo} and {hi} px"),
        ));
    }

    issues
}

pub fn validate_personal_info(info: &PersonalInfo) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let name = info.full_name.trim();
    if name.is_empty() {
        issues.push(ValidationIssue::new("personal_info.full_name", "is required"));
    } else if name.chars().count() > MAX_NAME_LEN {
        issues.push(ValidationIssue::new(
            "personal_info.full_name",
            format!("must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    if let Some(email) = info.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        if !email.contains('@') {
            issues.push(ValidationIssue::new(
                "personal_info.email",
                "must be an email address",
            ));
        }
    }
    issues
}

pub fn validate_sections(sections: &[CvSection]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    for (i, section) in sections.iter().enumerate() {
        let id = section.id.trim();
        if id.is_empty() {
            issues.push(ValidationIssue::new(format!("sections[{i}].id"), "is required"));
        } else if !seen.insert(id) {
            issues.push(ValidationIssue::new(
                format!("sections[{i}].id"),
                format!("duplicate section id '{id}'"),
            ));
        }
    }
    issues
}

pub fn validate_document(
    info: &PersonalInfo,
    sections: &[CvSection],
    settings: &TemplateSettings,
) -> Vec<ValidationIssue> {
    let mut issues = validate_personal_info(info);
    issues.extend(validate_sections(sections));
    issues.extend(validate_settings(settings));
    issues
}

/// Converts collected issues into a single 400 error.
pub fn ensure_valid(issues: Vec<ValidationIssue>) -> Result<(), AppError> {
    if issues.is_empty() {
        return Ok(());
    }
    let message = issues
        .iter()
        .map(|issue| format!("{} {}", issue.field, issue.message))
        .collect::<Vec<_>>()
        .join("; ");
    Err(AppError::Validation(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::SectionContent;

    fn section(id: &str) -> CvSection {
        CvSection {
            id: id.to_string(),
            title: "T".to_string(),
            order: 0,
            is_visible: true,
            content: SectionContent::Custom(vec![]),
        }
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1B2C3"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color("red; background: url(x)"));
    }

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&TemplateSettings::default()).is_empty());
    }

    #[test]
    fn test_out_of_range_settings_reported() {
        let settings = TemplateSettings {
            custom_primary_color: Some("blue".to_string()),
            line_height: 4.0,
            letter_spacing: -3.0,
            photo_size: 10,
            ..Default::default()
        };
        let fields: Vec<_> = validate_settings(&settings)
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "settings.custom_primary_color",
                "settings.line_height",
                "settings.letter_spacing",
                "settings.photo_size"
            ]
        );
    }

    #[test]
    fn test_name_required() {
        let issues = validate_personal_info(&PersonalInfo::default());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "personal_info.full_name");
    }

    #[test]
    fn test_bad_email_reported_empty_email_ignored() {
        let mut info = PersonalInfo {
            full_name: "Ada".to_string(),
            email: Some("ada.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(validate_personal_info(&info).len(), 1);
        info.email = Some(String::new());
        assert!(validate_personal_info(&info).is_empty());
    }

    #[test]
    fn test_duplicate_and_empty_section_ids() {
        let issues = validate_sections(&[section("a"), section("a"), section(" ")]);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("duplicate"));
        assert_eq!(issues[1].field, "sections[2].id");
    }

    #[test]
    fn test_ensure_valid_joins_messages() {
        assert!(ensure_valid(vec![]).is_ok());
        let err = ensure_valid(vec![
            ValidationIssue::new("a", "is bad"),
            ValidationIssue::new("b", "is worse"),
        ])
        .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "a is bad; b is worse"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
