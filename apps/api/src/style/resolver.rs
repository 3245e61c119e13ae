//! Settings resolution: user preferences + preset tables → `StyleTokens`.
//!
//! Pure and deterministic. No I/O.

use crate::models::settings::{FontSizePreset, MarginPreset, TemplateSettings};
use crate::style::fonts::find_font_family;
use crate::style::palette::find_color_scheme;
use crate::style::tokens::{Margins, StyleTokens};

// ────────────────────────────────────────────────────────────────────────────
// Preset tables
// ────────────────────────────────────────────────────────────────────────────

const MARGIN_PRESETS: &[(MarginPreset, Margins)] = &[
    (
        MarginPreset::Compact,
        Margins {
            top: 10.0,
            right: 12.0,
            bottom: 10.0,
            left: 12.0,
        },
    ),
    (
        MarginPreset::Normal,
        Margins {
            top: 15.0,
            right: 18.0,
            bottom: 15.0,
            left: 18.0,
        },
    ),
    (
        MarginPreset::Spacious,
        Margins {
            top: 20.0,
            right: 25.0,
            bottom: 20.0,
            left: 25.0,
        },
    ),
];

impl MarginPreset {
    pub fn margins(self) -> Margins {
        MARGIN_PRESETS
            .iter()
            .find(|(preset, _)| *preset == self)
            .map(|(_, margins)| *margins)
            .unwrap_or(MARGIN_PRESETS[1].1)
    }
}

impl FontSizePreset {
    pub fn multiplier(self) -> f32 {
        match self {
            FontSizePreset::Small => 0.9,
            FontSizePreset::Medium => 1.0,
            FontSizePreset::Large => 1.1,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolution
// ────────────────────────────────────────────────────────────────────────────

/// Merges scheme, font, presets and per-user overrides into one token set.
/// Custom primary/accent colours replace the scheme's values outright.
pub fn resolve_settings(settings: &TemplateSettings) -> StyleTokens {
    let scheme = find_color_scheme(&settings.color_scheme_id);
    let font = find_font_family(&settings.font_family_id);

    let primary = settings
        .custom_primary_color
        .clone()
        .unwrap_or_else(|| scheme.primary.to_string());
    let accent = settings
        .custom_accent_color
        .clone()
        .unwrap_or_else(|| scheme.accent.to_string());

    StyleTokens {
        primary,
        secondary: scheme.secondary.to_string(),
        accent,
        text: scheme.text.to_string(),
        text_muted: scheme.text_muted.to_string(),
        background: scheme.background.to_string(),
        font_family: font.stack.to_string(),
        line_height: settings.line_height,
        letter_spacing: settings.letter_spacing,
        margins: settings.margin_preset.margins(),
        font_scale: settings.font_size.multiplier(),
        photo_size: settings.photo_size,
    }
}

/// Whether the rendering client has confirmed mount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

/// Hydration-safe resolver. Returns the fixed default token set until
/// mount is confirmed; the transition is one-way.
#[derive(Debug, Default)]
pub struct SettingsResolver {
    state: MountState,
}

impl SettingsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a resolver from a client-reported flag.
    pub fn from_mount_flag(mounted: bool) -> Self {
        let mut resolver = Self::new();
        if mounted {
            resolver.mark_mounted();
        }
        resolver
    }

    pub fn mark_mounted(&mut self) {
        self.state = MountState::Mounted;
    }

    pub fn resolve(&self, settings: &TemplateSettings) -> StyleTokens {
        match self.state {
            MountState::Unmounted => StyleTokens::hydration_default(),
            MountState::Mounted => resolve_settings(settings),
        }
    }
}
