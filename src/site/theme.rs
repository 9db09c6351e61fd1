/// Light / dark site theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `"dark"` is dark; anything else falls back to light.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Toggle button text: names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Dark",
            Self::Dark => "☀️ Light",
        }
    }
}
