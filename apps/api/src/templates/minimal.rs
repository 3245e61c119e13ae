use crate::templates::html::{
    escape_html, present, render_contact_list, render_section, render_summary, stylesheet,
};
use crate::templates::registry::{CvTemplate, TemplateContext};

// No photo, no colour blocks. Accent colour only on headings.
const CSS: &str = r#"
.cv-minimal .cv-name { font-size: 1.8em; font-weight: 600; }
.cv-minimal .cv-headline { color: $(text-muted); }
.cv-minimal .cv-contact { font-size: 0.9em; color: $(text-muted); }
.cv-minimal .cv-contact a { color: inherit; text-decoration: none; }
.cv-minimal .cv-heading { font-size: 0.85em; font-weight: 600; text-transform: uppercase;
  letter-spacing: 0.1em; color: $(accent); }
"#;

pub struct MinimalTemplate;

impl CvTemplate for MinimalTemplate {
    fn id(&self) -> &'static str {
        "minimal"
    }

    fn name(&self) -> &'static str {
        "Minimal"
    }

    fn description(&self) -> &'static str {
        "Typography-only design without photo or colour blocks"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let info = ctx.personal_info;
        let mut html = stylesheet(CSS);
        html.push_str(r#"<article class="cv-page cv-minimal"><header class="cv-header">"#);
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
        html.push_str(&render_contact_list(info));
        html.push_str("</header>");
        if let Some(summary) = render_summary(info) {
            html.push_str(&summary);
        }
        for section in ctx.sections {
            html.push_str(&render_section(section, "cv-heading"));
        }
        html.push_str("</article>");
        html
    }
}
