use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::years::ActiveYears;

/// A painter as recorded in one row of the artist file.
///
/// Field order matches the column order of the file, which lets the loader
/// deserialize a row positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artist {
    /// Row identifier. Not checked for uniqueness.
    pub id: i64,
    pub name: String,

    /// Either a single year (`"1900"`) or a `birth-death` range, kept as
    /// written. See [`Artist::active_years`].
    pub years: String,

    pub genre: String,
    pub nationality: String,
    pub biography: String,

    /// Reference link, usually a Wikipedia URL.
    pub reference: String,

    pub total_paintings: u32,
}

impl Artist {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            years: String::new(),
            genre: String::new(),
            nationality: String::new(),
            biography: String::new(),
            reference: String::new(),
            total_paintings: 0,
        }
    }

    #[must_use]
    pub fn with_years(mut self, years: impl Into<String>) -> Self {
        self.years = years.into();
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    #[must_use]
    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    #[must_use]
    pub fn with_total_paintings(mut self, total: u32) -> Self {
        self.total_paintings = total;
        self
    }

    /// Interpret the `years` field.
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` when the field is neither a year nor a
    /// two-part range of years.
    pub fn active_years(&self) -> Result<ActiveYears> {
        self.years.parse()
    }
}
