//! Markup helpers shared by every template.
//!
//! Templates own their page structure and stylesheet; item-level markup for
//! each section kind lives here so all designs interpret `items` the same way.

use crate::models::cv::{CvSection, PersonalInfo, SectionContent};
use crate::models::settings::TemplateSettings;
use crate::style::CssVar;

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escaped text with line breaks preserved.
pub fn multiline(s: &str) -> String {
    escape_html(s.trim()).replace('\n', "<br>")
}

/// Returns the trimmed value when it is present and non-empty.
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Rejects URLs with script-capable schemes. Relative paths pass.
pub fn safe_url(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    match lower.split_once(':') {
        None => Some(url),
        Some((scheme, _)) if matches!(scheme, "http" | "https" | "mailto" | "tel") => Some(url),
        Some(_) if lower.starts_with("data:image/") => Some(url),
        // "localhost:8080/x" style values have no scheme but contain a colon
        Some((prefix, _)) if prefix.contains('/') || prefix.contains('.') => Some(url),
        Some(_) => None,
    }
}

/// Replaces `$(key)` placeholders with `var(--cv-key, fallback)` references.
pub fn expand_vars(css: &str) -> String {
    let mut out = css.to_string();
    for var in CssVar::ALL {
        let key = var.name().trim_start_matches("--cv-");
        out = out.replace(&format!("$({key})"), &var.var());
    }
    out
}

/// Page-level rules every template builds on.
const BASE_CSS: &str = r#"
.cv-page { box-sizing: border-box; font-family: $(font-family); color: $(text); background: $(background);
  line-height: $(line-height); letter-spacing: $(letter-spacing);
  padding: $(margin-top) $(margin-right) $(margin-bottom) $(margin-left);
  font-size: calc(10.5pt * $(font-scale)); }
.cv-page h1, .cv-page h2, .cv-page h3 { margin: 0; }
.cv-page ul { margin: 0.25em 0 0; padding-left: 1.2em; }
.cv-section { margin-top: 1.1em; }
.cv-item { margin-top: 0.6em; }
.cv-item-header { display: flex; justify-content: space-between; gap: 1em; }
.cv-item-title { font-weight: 600; }
.cv-item-date, .cv-item-subtitle { color: $(text-muted); }
.cv-item-date { white-space: nowrap; }
.cv-tags { display: flex; flex-wrap: wrap; gap: 0.4em; list-style: none; padding: 0; }
.cv-tag { border: 1px solid $(accent); border-radius: 3px; padding: 0 0.4em; }
.cv-skill-level { display: inline-block; margin-left: 0.4em; color: $(accent); }
.cv-photo { width: $(photo-size); height: $(photo-size); object-fit: cover; }
.cv-contact { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 0.3em 1em; }
"#;

/// Wraps template-specific CSS together with the base rules.
pub fn stylesheet(template_css: &str) -> String {
    format!(
        "<style>{}{}</style>",
        expand_vars(BASE_CSS),
        expand_vars(template_css)
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Header pieces
// ────────────────────────────────────────────────────────────────────────────

pub struct ContactEntry {
    pub kind: &'static str,
    pub text: String,
    pub href: Option<String>,
}

/// Contact details in display order, skipping anything not provided.
pub fn contact_entries(info: &PersonalInfo) -> Vec<ContactEntry> {
    let mut entries = Vec::new();
    if let Some(email) = present(&info.email) {
        entries.push(ContactEntry {
            kind: "email",
            text: email.to_string(),
            href: Some(format!("mailto:{email}")),
        });
    }
    if let Some(phone) = present(&info.phone) {
        entries.push(ContactEntry {
            kind: "phone",
            text: phone.to_string(),
            href: Some(format!("tel:{}", phone.replace(' ', ""))),
        });
    }
    if let Some(location) = present(&info.location) {
        entries.push(ContactEntry {
            kind: "location",
            text: location.to_string(),
            href: None,
        });
    }
    for (kind, value) in [
        ("linkedin", &info.linkedin),
        ("github", &info.github),
        ("website", &info.website),
    ] {
        if let Some(url) = present(value) {
            entries.push(ContactEntry {
                kind,
                text: display_url(url),
                href: safe_url(url).map(str::to_string),
            });
        }
    }
    entries
}

fn display_url(url: &str) -> String {
    url.trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.")
        .trim_end_matches('/')
        .to_string()
}

pub fn render_contact_list(info: &PersonalInfo) -> String {
    let entries = contact_entries(info);
    if entries.is_empty() {
        return String::new();
    }
    let items: String = entries
        .iter()
        .map(|entry| match &entry.href {
            Some(href) => format!(
                r#"<li class="cv-contact-{}"><a href="{}">{}</a></li>"#,
                entry.kind,
                escape_html(href),
                escape_html(&entry.text)
            ),
            None => format!(
                r#"<li class="cv-contact-{}">{}</li>"#,
                entry.kind,
                escape_html(&entry.text)
            ),
        })
        .collect();
    format!(r#"<ul class="cv-contact">{items}</ul>"#)
}

/// Avatar markup, or `None` when hidden by settings or no usable URL exists.
pub fn render_photo(info: &PersonalInfo, settings: &TemplateSettings) -> Option<String> {
    if !settings.show_photo {
        return None;
    }
    let url = present(&info.avatar_url).and_then(safe_url)?;
    Some(format!(
        r#"<img class="cv-photo" src="{}" alt="{}" style="border-radius: {};">"#,
        escape_html(url),
        escape_html(&info.full_name),
        settings.photo_shape.border_radius()
    ))
}

pub fn render_summary(info: &PersonalInfo) -> Option<String> {
    present(&info.summary).map(|summary| {
        format!(
            r#"<p class="cv-summary">{}</p>"#,
            multiline(summary)
        )
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn date_range(start: &Option<String>, end: &Option<String>, current: bool) -> Option<String> {
    let end = if current {
        Some("Present")
    } else {
        present(end)
    };
    match (present(start), end) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s.to_string()),
        (None, Some(e)) => Some(e.to_string()),
        (None, None) => None,
    }
}

fn join_present(parts: &[Option<&str>], sep: &str) -> Option<String> {
    let parts: Vec<&str> = parts.iter().flatten().copied().collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(sep))
    }
}

fn item_block(
    title: &str,
    subtitle: Option<String>,
    date: Option<String>,
    body: Option<String>,
) -> String {
    let mut html = String::from(r#"<div class="cv-item"><div class="cv-item-header">"#);
    html.push_str(&format!(
        r#"<span class="cv-item-title">{}</span>"#,
        escape_html(title)
    ));
    if let Some(date) = date {
        html.push_str(&format!(
            r#"<span class="cv-item-date">{}</span>"#,
            escape_html(&date)
        ));
    }
    html.push_str("</div>");
    if let Some(subtitle) = subtitle {
        html.push_str(&format!(
            r#"<div class="cv-item-subtitle">{}</div>"#,
            escape_html(&subtitle)
        ));
    }
    if let Some(body) = body {
        html.push_str(&body);
    }
    html.push_str("</div>");
    html
}

fn description(text: &Option<String>) -> Option<String> {
    present(text).map(|t| format!(r#"<p class="cv-item-description">{}</p>"#, multiline(t)))
}

fn bullet_list(class: &str, items: &[String]) -> Option<String> {
    let lis: String = items
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(|i| format!("<li>{}</li>", escape_html(i)))
        .collect();
    if lis.is_empty() {
        None
    } else {
        Some(format!(r#"<ul class="{class}">{lis}</ul>"#))
    }
}

fn link(url: &Option<String>, label: &str) -> Option<String> {
    let href = present(url).and_then(safe_url)?;
    Some(format!(
        r#"<a class="cv-item-link" href="{}">{}</a>"#,
        escape_html(href),
        escape_html(label)
    ))
}

fn concat(parts: Vec<Option<String>>) -> Option<String> {
    let joined: String = parts.into_iter().flatten().collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Renders the items of one section. Each arm only sees its own item type.
pub fn render_items(content: &SectionContent) -> String {
    match content {
        SectionContent::Experience(items) => items
            .iter()
            .map(|item| {
                item_block(
                    &item.position,
                    join_present(
                        &[Some(item.company.as_str()), present(&item.location)],
                        ", ",
                    ),
                    date_range(&item.start_date, &item.end_date, item.current),
                    concat(vec![
                        description(&item.description),
                        bullet_list("cv-highlights", &item.highlights),
                    ]),
                )
            })
            .collect(),
        SectionContent::Education(items) => items
            .iter()
            .map(|item| {
                let degree = join_present(
                    &[Some(item.degree.as_str()), present(&item.field)],
                    " in ",
                )
                .unwrap_or_default();
                let gpa = present(&item.gpa).map(|g| format!("GPA {g}"));
                item_block(
                    &degree,
                    join_present(&[Some(item.institution.as_str()), gpa.as_deref()], " · "),
                    date_range(&item.start_date, &item.end_date, false),
                    description(&item.description),
                )
            })
            .collect(),
        SectionContent::Skills(items) => {
            let lis: String = items
                .iter()
                .map(|skill| {
                    let level = skill
                        .level
                        .map(|l| {
                            let l = l.min(5) as usize;
                            format!(
                                r#"<span class="cv-skill-level" data-level="{l}">{}{}</span>"#,
                                "●".repeat(l),
                                "○".repeat(5 - l)
                            )
                        })
                        .unwrap_or_default();
                    format!(
                        r#"<li class="cv-skill">{}{level}</li>"#,
                        escape_html(&skill.name)
                    )
                })
                .collect();
            format!(r#"<ul class="cv-skills">{lis}</ul>"#)
        }
        SectionContent::Projects(items) => items
            .iter()
            .map(|item| {
                let tech = if item.technologies.is_empty() {
                    None
                } else {
                    Some(item.technologies.join(", "))
                };
                item_block(
                    &item.name,
                    tech,
                    date_range(&item.start_date, &item.end_date, false),
                    concat(vec![description(&item.description), link(&item.url, "Link")]),
                )
            })
            .collect(),
        SectionContent::Certifications(items) => items
            .iter()
            .map(|item| {
                let credential = present(&item.credential_id).map(|c| format!("ID {c}"));
                item_block(
                    &item.name,
                    join_present(&[present(&item.issuer), credential.as_deref()], " · "),
                    present(&item.date).map(str::to_string),
                    link(&item.url, "Verify"),
                )
            })
            .collect(),
        SectionContent::Languages(items) => {
            let lis: String = items
                .iter()
                .map(|item| match present(&item.proficiency) {
                    Some(p) => format!(
                        r#"<li class="cv-language">{} <span class="cv-item-subtitle">({})</span></li>"#,
                        escape_html(&item.language),
                        escape_html(p)
                    ),
                    None => format!(
                        r#"<li class="cv-language">{}</li>"#,
                        escape_html(&item.language)
                    ),
                })
                .collect();
            format!(r#"<ul class="cv-languages">{lis}</ul>"#)
        }
        SectionContent::Awards(items) => items
            .iter()
            .map(|item| {
                item_block(
                    &item.title,
                    present(&item.issuer).map(str::to_string),
                    present(&item.date).map(str::to_string),
                    description(&item.description),
                )
            })
            .collect(),
        SectionContent::Volunteer(items) => items
            .iter()
            .map(|item| {
                item_block(
                    &item.role,
                    Some(item.organization.clone()).filter(|o| !o.trim().is_empty()),
                    date_range(&item.start_date, &item.end_date, false),
                    description(&item.description),
                )
            })
            .collect(),
        SectionContent::References(items) => items
            .iter()
            .map(|item| {
                let contact = join_present(&[present(&item.email), present(&item.phone)], " · ")
                    .map(|c| format!(r#"<div class="cv-reference-contact">{}</div>"#, escape_html(&c)));
                item_block(
                    &item.name,
                    join_present(&[present(&item.position), present(&item.company)], ", "),
                    None,
                    contact,
                )
            })
            .collect(),
        SectionContent::Publications(items) => items
            .iter()
            .map(|item| {
                item_block(
                    &item.title,
                    present(&item.publisher).map(str::to_string),
                    present(&item.date).map(str::to_string),
                    concat(vec![description(&item.description), link(&item.url, "Read")]),
                )
            })
            .collect(),
        SectionContent::Interests(items) => {
            let lis: String = items
                .iter()
                .map(|item| {
                    let title = if item.keywords.is_empty() {
                        escape_html(&item.name)
                    } else {
                        format!(
                            "{}: {}",
                            escape_html(&item.name),
                            escape_html(&item.keywords.join(", "))
                        )
                    };
                    format!(r#"<li class="cv-tag">{title}</li>"#)
                })
                .collect();
            format!(r#"<ul class="cv-tags">{lis}</ul>"#)
        }
        SectionContent::About(items) => items
            .iter()
            .filter(|item| !item.content.trim().is_empty())
            .map(|item| format!(r#"<p class="cv-about">{}</p>"#, multiline(&item.content)))
            .collect(),
        SectionContent::Custom(items) => items
            .iter()
            .map(|item| {
                item_block(
                    &item.title,
                    present(&item.subtitle).map(str::to_string),
                    present(&item.date).map(str::to_string),
                    description(&item.description),
                )
            })
            .collect(),
    }
}

/// Full `<section>` for one CV section with the template's heading class.
pub fn render_section(section: &CvSection, heading_class: &str) -> String {
    format!(
        r#"<section class="cv-section cv-section--{}" data-section-id="{}"><h2 class="{}">{}</h2>{}</section>"#,
        section.kind().as_str(),
        escape_html(&section.id),
        heading_class,
        escape_html(&section.title),
        render_items(&section.content)
    )
}
