//! Error types for program planning.

use thiserror::Error;

use crate::repository::RepositoryError;
use crate::validation::ValidationError;

/// Result type for program planning operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

/// Errors raised while configuring or planning a program.
///
/// Slot layout itself never fails: missing regulations and malformed
/// durations degrade to defaults. These variants cover configuration and
/// the opt-in strict policies.
#[derive(Debug, Error)]
pub enum ProgramError {
    /// A wall-clock time was not in `HH:MM` form.
    #[error("invalid clock time: {0:?} (expected HH:MM)")]
    InvalidClockTime(String),

    /// A venue ran past midnight while overflow is rejected.
    #[error("venue '{venue}' runs past midnight (ends at {end})")]
    DayOverflow { venue: String, end: String },

    /// Items belong to categories that no hall hosts, while unmapped
    /// categories are rejected.
    #[error("no hall hosts categories: {}", .0.join(", "))]
    UnmappedCategories(Vec<String>),

    /// Configuration or data failed integrity checks.
    #[error("{} validation error(s): {}", .0.len(), join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error (file operations)
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Registration store error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<toml::de::Error> for ProgramError {
    fn from(err: toml::de::Error) -> Self {
        ProgramError::Config(err.to_string())
    }
}

impl From<Vec<ValidationError>> for ProgramError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ProgramError::Validation(errors)
    }
}
