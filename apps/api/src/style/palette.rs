//! Fixed colour schemes offered by the settings panel.
//!
//! The first entry is the fallback for unknown scheme ids, so it must stay
//! in sync with `DEFAULT_COLOR_SCHEME_ID`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorScheme {
    pub id: &'static str,
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub background: &'static str,
}

pub const COLOR_SCHEMES: &[ColorScheme] = &[
    ColorScheme {
        id: "ocean",
        name: "Ocean",
        primary: "#1e40af",
        secondary: "#3b82f6",
        accent: "#0ea5e9",
        text: "#1f2937",
        text_muted: "#6b7280",
        background: "#ffffff",
    },
    ColorScheme {
        id: "forest",
        name: "Forest",
        primary: "#166534",
        secondary: "#22c55e",
        accent: "#84cc16",
        text: "#1c1917",
        text_muted: "#57534e",
        background: "#ffffff",
    },
    ColorScheme {
        id: "crimson",
        name: "Crimson",
        primary: "#991b1b",
        secondary: "#dc2626",
        accent: "#f97316",
        text: "#1f2937",
        text_muted: "#6b7280",
        background: "#ffffff",
    },
    ColorScheme {
        id: "slate",
        name: "Slate",
        primary: "#334155",
        secondary: "#64748b",
        accent: "#0f766e",
        text: "#0f172a",
        text_muted: "#64748b",
        background: "#ffffff",
    },
    ColorScheme {
        id: "plum",
        name: "Plum",
        primary: "#6b21a8",
        secondary: "#a855f7",
        accent: "#ec4899",
        text: "#1f2937",
        text_muted: "#6b7280",
        background: "#ffffff",
    },
    ColorScheme {
        id: "amber",
        name: "Amber",
        primary: "#92400e",
        secondary: "#d97706",
        accent: "#facc15",
        text: "#292524",
        text_muted: "#78716c",
        background: "#fffbeb",
    },
    ColorScheme {
        id: "midnight",
        name: "Midnight",
        primary: "#111827",
        secondary: "#374151",
        accent: "#6366f1",
        text: "#111827",
        text_muted: "#4b5563",
        background: "#f9fafb",
    },
    ColorScheme {
        id: "teal",
        name: "Teal",
        primary: "#115e59",
        secondary: "#14b8a6",
        accent: "#f59e0b",
        text: "#134e4a",
        text_muted: "#5f7a78",
        background: "#ffffff",
    },
];

/// Looks up a scheme by id, falling back to the first entry.
pub fn find_color_scheme(id: &str) -> &'static ColorScheme {
    COLOR_SCHEMES
        .iter()
        .find(|scheme| scheme.id == id)
        .unwrap_or(&COLOR_SCHEMES[0])
}
