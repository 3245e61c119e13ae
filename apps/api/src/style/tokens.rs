//! Resolved style tokens and their CSS custom-property encoding.
//!
//! Templates never read settings colours directly; they reference
//! `var(--cv-*, fallback)` so a template renders sensibly even when the
//! wrapper has not set a variable.

use serde::Serialize;

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Every CSS custom property a template may consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssVar {
    Primary,
    Secondary,
    Accent,
    Text,
    TextMuted,
    Background,
    FontFamily,
    LineHeight,
    LetterSpacing,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    FontScale,
    PhotoSize,
}

impl CssVar {
    pub const ALL: [CssVar; 15] = [
        CssVar::Primary,
        CssVar::Secondary,
        CssVar::Accent,
        CssVar::Text,
        CssVar::TextMuted,
        CssVar::Background,
        CssVar::FontFamily,
        CssVar::LineHeight,
        CssVar::LetterSpacing,
        CssVar::MarginTop,
        CssVar::MarginRight,
        CssVar::MarginBottom,
        CssVar::MarginLeft,
        CssVar::FontScale,
        CssVar::PhotoSize,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CssVar::Primary => "--cv-primary",
            CssVar::Secondary => "--cv-secondary",
            CssVar::Accent => "--cv-accent",
            CssVar::Text => "--cv-text",
            CssVar::TextMuted => "--cv-text-muted",
            CssVar::Background => "--cv-background",
            CssVar::FontFamily => "--cv-font-family",
            CssVar::LineHeight => "--cv-line-height",
            CssVar::LetterSpacing => "--cv-letter-spacing",
            CssVar::MarginTop => "--cv-margin-top",
            CssVar::MarginRight => "--cv-margin-right",
            CssVar::MarginBottom => "--cv-margin-bottom",
            CssVar::MarginLeft => "--cv-margin-left",
            CssVar::FontScale => "--cv-font-scale",
            CssVar::PhotoSize => "--cv-photo-size",
        }
    }

    /// Literal used by templates when the variable is unset.
    pub fn fallback(&self) -> &'static str {
        match self {
            CssVar::Primary => "#1e40af",
            CssVar::Secondary => "#3b82f6",
            CssVar::Accent => "#0ea5e9",
            CssVar::Text => "#1f2937",
            CssVar::TextMuted => "#6b7280",
            CssVar::Background => "#ffffff",
            CssVar::FontFamily => "system-ui, sans-serif",
            CssVar::LineHeight => "1.5",
            CssVar::LetterSpacing => "0px",
            CssVar::MarginTop | CssVar::MarginBottom => "15mm",
            CssVar::MarginRight | CssVar::MarginLeft => "18mm",
            CssVar::FontScale => "1",
            CssVar::PhotoSize => "100px",
        }
    }

    /// `var(--cv-x, fallback)` for use inside template stylesheets.
    pub fn var(&self) -> String {
        format!("var({}, {})", self.name(), self.fallback())
    }
}

/// The resolved, ready-to-apply style values for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleTokens {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub text_muted: String,
    pub background: String,
    pub font_family: String,
    pub line_height: f32,
    pub letter_spacing: f32,
    pub margins: Margins,
    pub font_scale: f32,
    pub photo_size: u32,
}

impl StyleTokens {
    /// Fixed token set used before the client confirms mount.
    /// Hard-coded on purpose: it must not depend on any lookup table.
    pub fn hydration_default() -> Self {
        Self {
            primary: "#1e40af".to_string(),
            secondary: "#3b82f6".to_string(),
            accent: "#0ea5e9".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#6b7280".to_string(),
            background: "#ffffff".to_string(),
            font_family: "'Inter', system-ui, sans-serif".to_string(),
            line_height: 1.5,
            letter_spacing: 0.0,
            margins: Margins {
                top: 15.0,
                right: 18.0,
                bottom: 15.0,
                left: 18.0,
            },
            font_scale: 1.0,
            photo_size: 100,
        }
    }

    pub fn value_of(&self, var: CssVar) -> String {
        match var {
            CssVar::Primary => self.primary.clone(),
            CssVar::Secondary => self.secondary.clone(),
            CssVar::Accent => self.accent.clone(),
            CssVar::Text => self.text.clone(),
            CssVar::TextMuted => self.text_muted.clone(),
            CssVar::Background => self.background.clone(),
            CssVar::FontFamily => self.font_family.clone(),
            CssVar::LineHeight => format!("{}", self.line_height),
            CssVar::LetterSpacing => format!("{}px", self.letter_spacing),
            CssVar::MarginTop => format!("{}mm", self.margins.top),
            CssVar::MarginRight => format!("{}mm", self.margins.right),
            CssVar::MarginBottom => format!("{}mm", self.margins.bottom),
            CssVar::MarginLeft => format!("{}mm", self.margins.left),
            CssVar::FontScale => format!("{}", self.font_scale),
            CssVar::PhotoSize => format!("{}px", self.photo_size),
        }
    }

    /// `(name, value)` pairs in a stable order.
    pub fn css_variables(&self) -> Vec<(&'static str, String)> {
        CssVar::ALL
            .iter()
            .map(|var| (var.name(), self.value_of(*var)))
            .collect()
    }

    /// Inline `style` attribute value declaring every variable.
    /// The caller is responsible for HTML-escaping it.
    pub fn style_attribute(&self) -> String {
        self.css_variables()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
