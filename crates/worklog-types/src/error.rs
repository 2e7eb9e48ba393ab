use std::fmt;

/// Result type for worklog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Timestamp input did not match any accepted layout
    InvalidTimestamp(String),
    /// Date input was not YYYY-MM-DD
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimestamp(input) => write!(
                f,
                "Invalid timestamp '{}' (expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS])",
                input
            ),
            Error::InvalidDate(input) => {
                write!(f, "Invalid date '{}' (expected YYYY-MM-DD)", input)
            }
        }
    }
}

impl std::error::Error for Error {}
