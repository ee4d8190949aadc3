use serde::{Deserialize, Serialize};

/// Per-field case sensitivity for text matching.
///
/// `true` means the field must match exactly, `false` means letters are
/// compared after lowercasing both sides. The defaults keep the historical
/// behaviour: names and genres ignore case, nationalities do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseRules {
    /// Used by artist info, biography, reference and painting-count lookups.
    pub name: bool,
    pub genre: bool,
    pub nationality: bool,
}

impl Default for CaseRules {
    fn default() -> Self {
        Self {
            name: false,
            genre: false,
            nationality: true,
        }
    }
}

impl CaseRules {
    /// The same sensitivity for every field.
    #[must_use]
    pub const fn all(case_sensitive: bool) -> Self {
        Self {
            name: case_sensitive,
            genre: case_sensitive,
            nationality: case_sensitive,
        }
    }

    #[must_use]
    pub const fn with_name(mut self, case_sensitive: bool) -> Self {
        self.name = case_sensitive;
        self
    }

    #[must_use]
    pub const fn with_genre(mut self, case_sensitive: bool) -> Self {
        self.genre = case_sensitive;
        self
    }

    #[must_use]
    pub const fn with_nationality(mut self, case_sensitive: bool) -> Self {
        self.nationality = case_sensitive;
        self
    }
}

/// A whole-value text comparison against one wanted string.
#[derive(Debug, Clone)]
pub(crate) struct Matcher {
    wanted: String,
    case_sensitive: bool,
}

impl Matcher {
    pub(crate) fn new(wanted: &str, case_sensitive: bool) -> Self {
        let wanted = if case_sensitive {
            wanted.to_string()
        } else {
            wanted.to_lowercase()
        };
        Self {
            wanted,
            case_sensitive,
        }
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        if self.case_sensitive {
            value == self.wanted
        } else {
            value.to_lowercase() == self.wanted
        }
    }
}
