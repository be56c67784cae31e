//! Error types for CIDR allocation

use thiserror::Error;

/// Result type for allocator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Allocator errors
///
/// Running out of space is not an error: an empty [`crate::SuggestionSet`]
/// is the normal "no capacity" outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// CIDR text could not be parsed
    #[error("Invalid CIDR '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// Request parameters are out of range
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl ToString) -> Self {
        Error::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error came from malformed CIDR text
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
