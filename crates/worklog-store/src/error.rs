use rusqlite::ErrorCode;
use std::fmt;

/// Result type for worklog-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer.
///
/// SQLite failures are classified on conversion so callers can react to
/// the interesting cases (duplicate key, locked file) without matching on
/// raw result codes.
#[derive(Debug)]
pub enum Error {
    /// A UNIQUE or PRIMARY KEY constraint was violated
    Duplicate(String),

    /// Some other constraint (foreign key, NOT NULL, CHECK) was violated
    Constraint(String),

    /// The database file cannot be opened or is locked by another process
    Unavailable(String),

    /// The database file was written by an incompatible version
    SchemaVersion { found: i32, expected: i32 },

    /// Any other database failure
    Database(rusqlite::Error),

    /// Attachment file IO failed
    Io(std::io::Error),

    /// Query-specific error (invalid input, not found, etc.)
    Query(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Duplicate(detail) => write!(f, "Duplicate record: {}", detail),
            Error::Constraint(detail) => write!(f, "Constraint violated: {}", detail),
            Error::Unavailable(detail) => write!(f, "Database unavailable: {}", detail),
            Error::SchemaVersion { found, expected } => write!(
                f,
                "Unsupported database schema version {} (this build expects {})",
                found, expected
            ),
            Error::Database(err) => write!(f, "Database error: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Query(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(code, ref message) = err {
            let detail = match message {
                Some(msg) => msg.clone(),
                None => code.to_string(),
            };
            match code.code {
                ErrorCode::ConstraintViolation => {
                    return if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                        || code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    {
                        Error::Duplicate(detail)
                    } else {
                        Error::Constraint(detail)
                    };
                }
                ErrorCode::CannotOpen
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase => {
                    return Error::Unavailable(detail);
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
