//! Executive: accent rule under the name and a boxed summary.

use crate::templates::html::{
    escape_html, present, render_contact_list, render_photo, render_section, render_summary,
    stylesheet,
};
use crate::templates::registry::{CvTemplate, TemplateContext};

const CSS: &str = r#"
.cv-executive .cv-header { display: flex; gap: 1.2em; align-items: flex-end;
  border-bottom: 4px solid $(accent); padding-bottom: 0.6em; }
.cv-executive .cv-name { font-size: 2.3em; color: $(primary); font-weight: 800; }
.cv-executive .cv-headline { font-size: 1.2em; color: $(secondary); }
.cv-executive .cv-contact a { color: $(primary); }
.cv-executive .cv-summary { background: $(background); border-left: 4px solid $(primary);
  padding: 0.6em 1em; margin-top: 1em; font-size: 1.05em; }
.cv-executive .cv-heading { color: $(primary); font-size: 1.15em; font-weight: 700; }
.cv-executive .cv-heading::after { content: ""; display: block; width: 3em; height: 3px;
  background: $(accent); margin-top: 0.2em; }
"#;

pub struct ExecutiveTemplate;

impl CvTemplate for ExecutiveTemplate {
    fn id(&self) -> &'static str {
        "executive"
    }

    fn name(&self) -> &'static str {
        "Executive"
    }

    fn description(&self) -> &'static str {
        "Strong name block with highlighted summary for senior profiles"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> String {
        let info = ctx.personal_info;
        let mut html = stylesheet(CSS);
        html.push_str(r#"<article class="cv-page cv-executive"><header class="cv-header">"#);
        if let Some(photo) = render_photo(info, ctx.settings) {
            html.push_str(&photo);
        }
        html.push_str("<div>");
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
        html.push_str("</div></header>");
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
