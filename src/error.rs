use thiserror::Error;

/// Convenience result type for session and cell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned across the crate.
///
/// This is a single error enum shared by session lifecycle, cell conversion,
/// search, and table writing.
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited-text record (e.g. unterminated quote, bad UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A cell's cleaned value could not be parsed into the requested type.
    #[error("failed to convert value at row {row} column {column}: {message} (raw='{raw}')")]
    Conversion {
        row: u64,
        column: usize,
        raw: String,
        message: String,
    },

    /// A time conversion was attempted against an empty effective value.
    #[error("empty value at row {row} column {column}")]
    EmptyValue { row: u64, column: usize },

    /// A search was invoked with an empty or whitespace-only pattern.
    #[error("search pattern is empty")]
    InvalidPattern,

    /// A first/last search found no matches.
    #[error("no match found for pattern '{pattern}'")]
    NotFound { pattern: String },

    /// Reset invoked on a session whose file handle has been released.
    #[error("session is not open")]
    NotOpen,
}
