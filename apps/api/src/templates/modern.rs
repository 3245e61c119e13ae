//! Modern: coloured header band, single column body. The default design.

use crate::templates::html::{
    escape_html, present, render_contact_list, render_photo, render_section, render_summary,
    stylesheet,
};
use crate::templates::registry::{CvTemplate, TemplateContext};

const CSS: &str = r#"
.cv-modern { padding: 0; }
.cv-modern .cv-header { display: flex; align-items: center; justify-content: space-between; gap: 1.5em;
  background: $(primary); color: #ffffff;
  padding: $(margin-top) $(margin-right) 1.2em $(margin-left); }
.cv-modern .cv-name { font-size: 2.1em; font-weight: 700; }
.cv-modern .cv-headline { font-size: 1.15em; opacity: 0.9; }
.cv-modern .cv-contact a { color: inherit; }
.cv-modern .cv-body { padding: 0.4em $(margin-right) $(margin-bottom) $(margin-left); }
.cv-modern .cv-heading { color: $(primary); text-transform: uppercase; font-size: 1em;
  letter-spacing: 0.08em; border-bottom: 2px solid $(accent); padding-bottom: 0.15em; }
"#;

pub struct ModernTemplate;

impl CvTemplate for ModernTemplate {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn name(&self) -> &'static str {
        "Modern"
    }

    fn description(&self) -> &'static str {
        "Bold colour header with a clean single-column body"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let info = ctx.personal_info;
        let mut html = stylesheet(CSS);
        html.push_str(r#"<article class="cv-page cv-modern"><header class="cv-header"><div>"#);
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
        html.push_str("</div>");
        if let Some(photo) = render_photo(info, ctx.settings) {
            html.push_str(&photo);
        }
        html.push_str(r#"</header><div class="cv-body">"#);
        if let Some(summary) = render_summary(info) {
            html.push_str(&summary);
        }
        for section in ctx.sections {
            html.push_str(&render_section(section, "cv-heading"));
        }
        html.push_str("</div></article>");
        html
    }
}
