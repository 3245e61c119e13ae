use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontCategory {
    Sans,
    Serif,
    Mono,
}

/// A selectable font family and the CSS stack it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontFamily {
    pub id: &'static str,
    pub name: &'static str,
    pub stack: &'static str,
    pub category: FontCategory,
}

// First entry doubles as the fallback for unknown ids.
pub const FONT_FAMILIES: &[FontFamily] = &[
    FontFamily {
        id: "inter",
        name: "Inter",
        stack: "'Inter', system-ui, sans-serif",
        category: FontCategory::Sans,
    },
    FontFamily {
        id: "roboto",
        name: "Roboto",
        stack: "'Roboto', 'Helvetica Neue', Arial, sans-serif",
        category: FontCategory::Sans,
    },
    FontFamily {
        id: "lato",
        name: "Lato",
        stack: "'Lato', 'Helvetica Neue', Arial, sans-serif",
        category: FontCategory::Sans,
    },
    FontFamily {
        id: "open-sans",
        name: "Open Sans",
        stack: "'Open Sans', Arial, sans-serif",
        category: FontCategory::Sans,
    },
    FontFamily {
        id: "merriweather",
        name: "Merriweather",
        stack: "'Merriweather', Georgia, serif",
        category: FontCategory::Serif,
    },
    FontFamily {
        id: "playfair",
        name: "Playfair Display",
        stack: "'Playfair Display', Georgia, serif",
        category: FontCategory::Serif,
    },
    FontFamily {
        id: "eb-garamond",
        name: "EB Garamond",
        stack: "'EB Garamond', Garamond, 'Times New Roman', serif",
        category: FontCategory::Serif,
    },
    FontFamily {
        id: "jetbrains-mono",
        name: "JetBrains Mono",
        stack: "'JetBrains Mono', 'Fira Code', monospace",
        category: FontCategory::Mono,
    },
];

pub fn find_font_family(id: &str) -> &'static FontFamily {
    FONT_FAMILIES
        .iter()
        .find(|font| font.id == id)
        .unwrap_or(&FONT_FAMILIES[0])
}
