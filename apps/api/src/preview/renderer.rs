//! Preview rendering: visible sections + resolved tokens + selected template → HTML.

use serde::Serialize;

use crate::models::cv::{CvSection, PersonalInfo};
use crate::models::settings::TemplateSettings;
use crate::style::{SettingsResolver, StyleTokens};
use crate::templates::html::escape_html;
use crate::templates::{TemplateContext, TemplateRegistry};

pub struct PreviewInput<'a> {
    pub personal_info: &'a PersonalInfo,
    pub sections: &'a [CvSection],
    /// Standalone HTML document instead of an embeddable fragment.
    pub is_full_preview: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenderedPreview {
    /// Id of the template actually used (after fallback).
    pub template_id: &'static str,
    pub tokens: StyleTokens,
    pub html: String,
}

/// Visible sections in ascending `order`. The sort is stable, so ties keep
/// their original relative order.
pub fn visible_sections(sections: &[CvSection]) -> Vec<&CvSection> {
    let mut visible: Vec<&CvSection> = sections.iter().filter(|s| s.is_visible).collect();
    visible.sort_by_key(|s| s.order);
    visible
}

pub fn render_preview(
    input: &PreviewInput<'_>,
    settings: &TemplateSettings,
    template_id: Option<&str>,
    registry: &TemplateRegistry,
    resolver: &SettingsResolver,
) -> RenderedPreview {
    let sections = visible_sections(input.sections);
    let tokens = resolver.resolve(settings);
    let template = registry.resolve(template_id);

    let ctx = TemplateContext {
        personal_info: input.personal_info,
        sections: &sections,
        settings,
    };
    let body = template.render(&ctx);

    let variant = if input.is_full_preview {
        "full"
    } else {
        "thumbnail"
    };
    let wrapper = format!(
        r#"<div class="cv-preview cv-preview--{variant}" data-template="{}" style="{}">{body}</div>"#,
        template.id(),
        escape_html(&tokens.style_attribute()),
    );

    let html = if input.is_full_preview {
        full_document(input.personal_info, &wrapper)
    } else {
        wrapper
    };

    RenderedPreview {
        template_id: template.id(),
        tokens,
        html,
    }
}

fn full_document(info: &PersonalInfo, content: &str) -> String {
    let title = if info.full_name.trim().is_empty() {
        "CV".to_string()
    } else {
        format!("{} - CV", escape_html(info.full_name.trim()))
    };
    format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{}</title>",
            "<style>body {{ margin: 0; background: #e5e7eb; }} ",
            ".cv-preview--full {{ width: 210mm; min-height: 297mm; margin: 0 auto; background: #ffffff; }} ",
            "@media print {{ body {{ background: none; }} }}</style>",
            "</head><body>{}</body></html>"
        ),
        title, content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::{AboutItem, SectionContent, SkillItem};
    use crate::templates::registry::DEFAULT_TEMPLATE_ID;

    fn section(id: &str, order: i32, visible: bool) -> CvSection {
        CvSection {
            id: id.to_string(),
            title: format!("Title {id}"),
            order,
            is_visible: visible,
            content: SectionContent::About(vec![AboutItem {
                content: format!("content {id}"),
            }]),
        }
    }

    fn info() -> PersonalInfo {
        PersonalInfo {
            full_name: "Grace Hopper".to_string(),
            headline: Some("Rear Admiral".to_string()),
            ..Default::default()
        }
    }

    fn render(sections: &[CvSection], template_id: Option<&str>, full: bool) -> RenderedPreview {
        let registry = TemplateRegistry::builtin().unwrap();
        let personal_info = info();
        let input = PreviewInput {
            personal_info: &personal_info,
            sections,
            is_full_preview: full,
        };
        render_preview(
            &input,
            &TemplateSettings::default(),
            template_id,
            &registry,
            &SettingsResolver::from_mount_flag(true),
        )
    }

    #[test]
    fn test_visible_sections_filters_and_sorts_stably() {
        let sections = vec![
            section("c", 2, true),
            section("hidden", 0, false),
            section("a", 1, true),
            section("b", 1, true),
        ];
        let ids: Vec<_> = visible_sections(&sections).iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rendered_output_has_only_visible_sections_in_order() {
        let sections = vec![
            section("third", 30, true),
            section("hidden", 5, false),
            section("first", 10, true),
            section("second", 20, true),
        ];
        for id in ["modern", "classic", "minimal", "sidebar", "executive"] {
            let html = render(&sections, Some(id), false).html;
            assert!(!html.contains(r#"data-section-id="hidden""#), "{id}");
            let first = html.find(r#"data-section-id="first""#).unwrap();
            let second = html.find(r#"data-section-id="second""#).unwrap();
            let third = html.find(r#"data-section-id="third""#).unwrap();
            assert!(first < second && second < third, "{id}");
        }
    }

    #[test]
    fn test_unknown_template_uses_default() {
        let preview = render(&[], Some("vaporwave"), false);
        assert_eq!(preview.template_id, DEFAULT_TEMPLATE_ID);
        assert!(preview.html.contains(r#"data-template="modern""#));
    }

    #[test]
    fn test_wrapper_exposes_css_variables() {
        let preview = render(&[], None, false);
        assert!(preview.html.starts_with(r#"<div class="cv-preview cv-preview--thumbnail""#));
        assert!(preview.html.contains("--cv-primary: #1e40af;"));
        assert!(preview.html.contains("--cv-margin-top: 15mm;"));
    }

    #[test]
    fn test_full_preview_is_a_document() {
        let preview = render(&[], Some("classic"), true);
        assert!(preview.html.starts_with("<!DOCTYPE html>"));
        assert!(preview.html.contains("<title>Grace Hopper - CV</title>"));
        assert!(preview.html.contains("cv-preview--full"));
    }

    #[test]
    fn test_unmounted_render_uses_default_tokens() {
        let registry = TemplateRegistry::builtin().unwrap();
        let personal_info = info();
        let settings = TemplateSettings {
            color_scheme_id: "crimson".to_string(),
            ..Default::default()
        };
        let input = PreviewInput {
            personal_info: &personal_info,
            sections: &[],
            is_full_preview: false,
        };
        let preview = render_preview(&input, &settings, None, &registry, &SettingsResolver::new());
        assert_eq!(preview.tokens, StyleTokens::hydration_default());

        let mounted =
            render_preview(&input, &settings, None, &registry, &SettingsResolver::from_mount_flag(true));
        assert_eq!(mounted.tokens.primary, "#991b1b");
    }

    #[test]
    fn test_sidebar_places_skills_in_aside() {
        let sections = vec![CvSection {
            id: "skills".to_string(),
            title: "Skills".to_string(),
            order: 0,
            is_visible: true,
            content: SectionContent::Skills(vec![SkillItem {
                name: "COBOL".to_string(),
                level: Some(5),
                category: None,
            }]),
        }];
        let html = render(&sections, Some("sidebar"), false).html;
        let aside_end = html.find("</aside>").unwrap();
        let skills = html.find(r#"data-section-id="skills""#).unwrap();
        assert!(skills < aside_end);
    }

    #[test]
    fn test_render_is_deterministic() {
        let sections = vec![section("a", 0, true)];
        assert_eq!(render(&sections, None, true).html, render(&sections, None, true).html);
    }
}
