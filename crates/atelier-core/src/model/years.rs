use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// The years an artist was active, as read from the `years` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActiveYears {
    /// A lone year such as `"1900"`.
    Single(i32),
    /// An inclusive `birth-death` span such as `"1881-1973"`.
    Range { birth: i32, death: i32 },
}

impl ActiveYears {
    /// Whether `year` falls inside the span (inclusive) or equals the
    /// single year.
    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        match *self {
            Self::Single(single) => single == year,
            Self::Range { birth, death } => birth <= year && year <= death,
        }
    }
}

fn parse_year(text: &str, whole: &str) -> Result<i32> {
    text.trim()
        .parse()
        .map_err(|_| Error::malformed(format!("invalid year {text:?} in years field {whole:?}")))
}

impl FromStr for ActiveYears {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if !s.contains('-') {
            return parse_year(s, s).map(Self::Single);
        }

        let mut parts = s.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(birth), Some(death), None) => Ok(Self::Range {
                birth: parse_year(birth, s)?,
                death: parse_year(death, s)?,
            }),
            _ => Err(Error::malformed(format!(
                "years field {s:?} has more than one '-'"
            ))),
        }
    }
}

impl fmt::Display for ActiveYears {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(year) => write!(f, "{year}"),
            Self::Range { birth, death } => write!(f, "{birth}-{death}"),
        }
    }
}
