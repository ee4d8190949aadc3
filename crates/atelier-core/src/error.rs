use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be opened or read. Fatal to a load.
    #[error("source unavailable: {source_name}: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A row or field that cannot be turned into a record.
    #[error("malformed record{}: {reason}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    MalformedRecord { line: Option<u64>, reason: String },

    /// A caller-supplied query parameter failed type conversion.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a line number to a `MalformedRecord`; other variants pass through.
    #[must_use]
    pub fn at_line(self, line: u64) -> Self {
        match self {
            Self::MalformedRecord { reason, .. } => Self::MalformedRecord {
                line: Some(line),
                reason,
            },
            other => other,
        }
    }

    /// Returns `true` for errors that the loader and evaluator skip over.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
