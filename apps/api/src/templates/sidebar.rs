//! Sidebar: two columns. Short list-like sections go to a tinted sidebar,
//! narrative sections to the main column. Relative order is kept per column.

use crate::models::cv::{CvSection, SectionKind};
use crate::templates::html::{
    escape_html, present, render_contact_list, render_photo, render_section, render_summary,
    stylesheet,
};
use crate::templates::registry::{CvTemplate, TemplateContext};

const CSS: &str = r#"
.cv-sidebar { display: grid; grid-template-columns: 32% 1fr; padding: 0; }
.cv-sidebar .cv-aside { background: $(primary); color: #ffffff;
  padding: $(margin-top) 1.2em $(margin-bottom) $(margin-left); }
.cv-sidebar .cv-aside a, .cv-sidebar .cv-aside .cv-item-subtitle { color: inherit; }
.cv-sidebar .cv-aside .cv-photo { display: block; margin: 0 auto 1em; border: 3px solid $(accent); }
.cv-sidebar .cv-aside .cv-contact { flex-direction: column; }
.cv-sidebar .cv-aside .cv-tag { border-color: #ffffff; }
.cv-sidebar .cv-aside .cv-skill-level { color: $(accent); }
.cv-sidebar .cv-aside-heading { font-size: 0.95em; text-transform: uppercase; letter-spacing: 0.1em;
  border-bottom: 1px solid rgba(255, 255, 255, 0.5); }
.cv-sidebar .cv-main { padding: $(margin-top) $(margin-right) $(margin-bottom) 1.5em; }
.cv-sidebar .cv-name { font-size: 2em; color: $(primary); }
.cv-sidebar .cv-headline { color: $(secondary); font-size: 1.1em; }
.cv-sidebar .cv-heading { color: $(primary); border-left: 4px solid $(accent); padding-left: 0.4em; }
"#;

fn in_sidebar(section: &CvSection) -> bool {
    matches!(
        section.kind(),
        SectionKind::Skills | SectionKind::Languages | SectionKind::Interests
    )
}

pub struct SidebarTemplate;

impl CvTemplate for SidebarTemplate {
    fn id(&self) -> &'static str {
        "sidebar"
    }

    fn name(&self) -> &'static str {
        "Sidebar"
    }

    fn description(&self) -> &'static str {
        "Two-column layout with contact details and skills in a coloured sidebar"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let info = ctx.personal_info;
        let mut html = stylesheet(CSS);
        html.push_str(r#"<article class="cv-page cv-sidebar"><aside class="cv-aside">"#);
        if let Some(photo) = render_photo(info, ctx.settings) {
            html.push_str(&photo);
        }
        html.push_str(&render_contact_list(info));
        for section in ctx.sections.iter().filter(|s| in_sidebar(s)) {
            html.push_str(&render_section(section, "cv-aside-heading"));
        }
        html.push_str(r#"</aside><main class="cv-main">"#);
        html.push_str(&format!(
            r#"<h1 class="cv-name">{}</h1>"#,
            escape_html(&info.full_name)
        ));
        if let Some(headline) = present(&info.headline) {
            html.push_str(&format!(
                r#"<div class="cv-headline">{}</div>"#,
                escape_html(headline)
            ));
        }
        if let Some(summary) = render_summary(info) {
            html.push_str(&summary);
        }
        for section in ctx.sections.iter().filter(|s| !in_sidebar(s)) {
            html.push_str(&render_section(section, "cv-heading"));
        }
        html.push_str("</main></article>");
        html
    }
}
