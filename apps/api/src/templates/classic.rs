//! Classic: centred serif header and ruled section headings.

use crate::templates::html::{
    escape_html, present, render_contact_list, render_photo, render_section, render_summary,
    stylesheet,
};
use crate::templates::registry::{CvTemplate, TemplateContext};

const CSS: &str = r#"
.cv-classic .cv-header { text-align: center; border-bottom: 1px solid $(text); padding-bottom: 0.8em; }
.cv-classic .cv-header .cv-photo { display: block; margin: 0 auto 0.6em; }
.cv-classic .cv-name { font-size: 2em; font-weight: 400; letter-spacing: 0.12em; text-transform: uppercase; }
.cv-classic .cv-headline { font-style: italic; color: $(text-muted); }
.cv-classic .cv-contact { justify-content: center; }
.cv-classic .cv-contact a { color: $(primary); }
.cv-classic .cv-summary { text-align: justify; }
.cv-classic .cv-heading { font-variant: small-caps; font-size: 1.1em; color: $(primary);
  border-bottom: 1px solid $(secondary); }
"#;

pub struct ClassicTemplate;

impl CvTemplate for ClassicTemplate {
    fn id(&self) -> &'static str {
        "classic"
    }

    fn name(&self) -> &'static str {
        "Classic"
    }

    fn description(&self) -> &'static str {
        "Traditional centred layout with ruled headings"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let info = ctx.personal_info;
        let mut html = stylesheet(CSS);
        html.push_str(r#"<article class="cv-page cv-classic"><header class="cv-header">"#);
        if let Some(photo) = render_photo(info, ctx.settings) {
            html.push_str(&photo);
        }
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
