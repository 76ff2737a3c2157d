// Theme colors, exposed to the stylesheet as CSS custom properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub border: String,
    pub primary: String,
    pub accent: String,
}

impl ThemePalette {
    pub fn default_dark() -> Self {
        Self {
            background: "#1e1e1e".to_string(),
            surface: "#2a2a2a".to_string(),
            foreground: "#d1d4dc".to_string(),
            muted: "#9a9ea8".to_string(),
            border: "#565656".to_string(),
            primary: "#4fa3e0".to_string(),
            accent: "#26a69a".to_string(),
        }
    }

    pub fn default_light() -> Self {
        Self {
            background: "#f4f6f8".to_string(),
            surface: "#ffffff".to_string(),
            foreground: "#1f2933".to_string(),
            muted: "#616e7c".to_string(),
            border: "#cbd2d9".to_string(),
            primary: "#007acc".to_string(),
            accent: "#009688".to_string(),
        }
    }

    /// Unknown names fall back to the light palette.
    pub fn for_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Self::default_dark(),
            _ => Self::default_light(),
        }
    }

    /// Inline `style` value declaring one `--name` variable per color.
    pub fn css_variables(&self) -> String {
        [
            ("background", &self.background),
            ("surface", &self.surface),
            ("foreground", &self.foreground),
            ("muted", &self.muted),
            ("border", &self.border),
            ("primary", &self.primary),
            ("accent", &self.accent),
        ]
        .iter()
        .map(|(name, value)| format!("--{}: {};", name, value))
        .collect::<Vec<_>>()
        .join(" ")
    }
}
