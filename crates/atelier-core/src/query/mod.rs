//! Query evaluation over a loaded slice of artists.
//!
//! Queries are pure: they take the artists, a parameter and the [`CaseRules`]
//! to match with, and return a complete (possibly empty) result. Prompting
//! for the parameter and printing the result belong to the caller.

pub mod ops;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::model::Artist;

pub use ops::{
    artist_info, biography, by_genre, by_nationality, by_year, reference, total_paintings,
};
pub use rules::CaseRules;

/// The seven supported lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    ArtistInfo,
    ByGenre,
    ByNationality,
    ByYear,
    Biography,
    Reference,
    TotalPaintings,
}

impl QueryKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 7] = [
        Self::ArtistInfo,
        Self::ByGenre,
        Self::ByNationality,
        Self::ByYear,
        Self::Biography,
        Self::Reference,
        Self::TotalPaintings,
    ];

    /// The key that selects this kind in the interactive menu.
    #[must_use]
    pub const fn menu_code(self) -> char {
        match self {
            Self::ArtistInfo => '1',
            Self::ByGenre => '2',
            Self::ByNationality => '3',
            Self::ByYear => '4',
            Self::Biography => '5',
            Self::Reference => '6',
            Self::TotalPaintings => '7',
        }
    }

    /// Map a menu selection back to a kind. Anything that is not exactly one
    /// of the seven codes (after trimming) returns `None`, meaning "exit".
    #[must_use]
    pub fn from_menu_code(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        Self::ALL
            .into_iter()
            .find(|kind| selection.len() == 1 && selection.starts_with(kind.menu_code()))
    }

    /// Whether the parameter is an artist name.
    #[must_use]
    pub const fn is_name_keyed(self) -> bool {
        matches!(
            self,
            Self::ArtistInfo | Self::Biography | Self::Reference | Self::TotalPaintings
        )
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::ArtistInfo => "artist_info",
            Self::ByGenre => "by_genre",
            Self::ByNationality => "by_nationality",
            Self::ByYear => "by_year",
            Self::Biography => "biography",
            Self::Reference => "reference",
            Self::TotalPaintings => "total_paintings",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query kind together with its typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    ArtistInfo(String),
    ByGenre(String),
    ByNationality(String),
    ByYear(i32),
    Biography(String),
    Reference(String),
    TotalPaintings(String),
}

impl Query {
    /// Build a query from a kind and raw user text. The text is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `kind` is [`QueryKind::ByYear`] and the
    /// text is not an integer.
    pub fn parse(kind: QueryKind, raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let text = raw.to_string();
        Ok(match kind {
            QueryKind::ArtistInfo => Self::ArtistInfo(text),
            QueryKind::ByGenre => Self::ByGenre(text),
            QueryKind::ByNationality => Self::ByNationality(text),
            QueryKind::ByYear => Self::ByYear(
                raw.parse()
                    .map_err(|_| Error::InvalidInput(format!("{raw:?} is not a year")))?,
            ),
            QueryKind::Biography => Self::Biography(text),
            QueryKind::Reference => Self::Reference(text),
            QueryKind::TotalPaintings => Self::TotalPaintings(text),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        match self {
            Self::ArtistInfo(_) => QueryKind::ArtistInfo,
            Self::ByGenre(_) => QueryKind::ByGenre,
            Self::ByNationality(_) => QueryKind::ByNationality,
            Self::ByYear(_) => QueryKind::ByYear,
            Self::Biography(_) => QueryKind::Biography,
            Self::Reference(_) => QueryKind::Reference,
            Self::TotalPaintings(_) => QueryKind::TotalPaintings,
        }
    }
}

/// The owned result of evaluating a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "results", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// Full records, from an artist info lookup.
    Details(Vec<Artist>),
    /// Artist names, from genre, nationality and year lookups.
    Names(Vec<String>),
    /// Biography or reference text.
    Texts(Vec<String>),
    /// Painting counts.
    Counts(Vec<u32>),
}

impl QueryOutcome {
    /// The empty outcome with the shape `kind` produces.
    #[must_use]
    pub const fn empty(kind: QueryKind) -> Self {
        match kind {
            QueryKind::ArtistInfo => Self::Details(Vec::new()),
            QueryKind::ByGenre | QueryKind::ByNationality | QueryKind::ByYear => {
                Self::Names(Vec::new())
            }
            QueryKind::Biography | QueryKind::Reference => Self::Texts(Vec::new()),
            QueryKind::TotalPaintings => Self::Counts(Vec::new()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Details(v) => v.len(),
            Self::Names(v) | Self::Texts(v) => v.len(),
            Self::Counts(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

/// Run `query` against `artists`.
pub fn evaluate(artists: &[Artist], query: &Query, rules: CaseRules) -> QueryOutcome {
    match query {
        Query::ArtistInfo(name) => {
            QueryOutcome::Details(artist_info(artists, name, rules).into_iter().cloned().collect())
        }
        Query::ByGenre(genre) => QueryOutcome::Names(owned(by_genre(artists, genre, rules))),
        Query::ByNationality(nationality) => {
            QueryOutcome::Names(owned(by_nationality(artists, nationality, rules)))
        }
        Query::ByYear(year) => QueryOutcome::Names(owned(by_year(artists, *year))),
        Query::Biography(name) => QueryOutcome::Texts(owned(biography(artists, name, rules))),
        Query::Reference(name) => QueryOutcome::Texts(owned(reference(artists, name, rules))),
        Query::TotalPaintings(name) => {
            QueryOutcome::Counts(total_paintings(artists, name, rules))
        }
    }
}

/// Parse `raw` for `kind` and run it. A parameter that does not parse
/// yields the empty outcome instead of an error.
pub fn evaluate_raw(
    artists: &[Artist],
    kind: QueryKind,
    raw: &str,
    rules: CaseRules,
) -> QueryOutcome {
    match Query::parse(kind, raw) {
        Ok(query) => evaluate(artists, &query, rules),
        Err(err) => {
            log::debug!("No results for {}: {}", kind, err);
            QueryOutcome::empty(kind)
        }
    }
}
