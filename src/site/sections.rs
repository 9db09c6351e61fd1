//! Site sections and hash routing.
//!
//! Panel order is algae → mushroom → plant. Arrow keys step through the
//! sections with wraparound; from the home view, Right jumps to the first
//! section and Left to the last.

/// One content section, each with its own orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Algae,
    Mushroom,
    Plant,
}

impl Section {
    /// Panel order.
    pub const ALL: [Section; 3] = [Section::Algae, Section::Mushroom, Section::Plant];

    /// Content dataset key.
    pub fn key(self) -> &'static str {
        match self {
            Self::Algae => "algae",
            Self::Mushroom => "mushroom",
            Self::Plant => "plant",
        }
    }

    /// Orbit container id, e.g. `orbit-algae`.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Algae => "orbit-algae",
            Self::Mushroom => "orbit-mushroom",
            Self::Plant => "orbit-plant",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Algae => "Algae",
            Self::Mushroom => "Mushroom",
            Self::Plant => "Plant",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    fn position(self) -> usize {
        match self {
            Self::Algae => 0,
            Self::Mushroom => 1,
            Self::Plant => 2,
        }
    }
}

/// Arrow direction for section stepping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

/// Where the page is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Section(Section),
}

impl Route {
    /// `#algae` → `Section(Algae)`. Empty or unknown hashes are home.
    pub fn from_hash(hash: &str) -> Self {
        let id = hash.trim().trim_start_matches('#').trim();
        Section::from_key(id).map_or(Self::Home, Self::Section)
    }

    pub fn to_hash(self) -> String {
        match self {
            Self::Home => "#home".to_string(),
            Self::Section(s) => format!("#{}", s.key()),
        }
    }

    pub fn section(self) -> Option<Section> {
        match self {
            Self::Home => None,
            Self::Section(s) => Some(s),
        }
    }

    /// Route after an arrow-key press.
    pub fn step(self, step: Step) -> Self {
        let all = Section::ALL;
        let n = all.len();
        match self {
            Self::Home => match step {
                Step::Next => Self::Section(all[0]),
                Step::Prev => Self::Section(all[n - 1]),
            },
            Self::Section(s) => {
                let i = s.position();
                let next = match step {
                    Step::Next => (i + 1) % n,
                    Step::Prev => (i + n - 1) % n,
                };
                Self::Section(all[next])
            }
        }
    }
}
