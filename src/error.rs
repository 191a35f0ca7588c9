use thiserror::Error;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("client with ID {0} not found")]
    ClientNotFound(i32),

    #[error("a client with this email already exists")]
    DuplicateEmail(#[source] sqlx::Error),

    #[error("referenced client does not exist")]
    UnknownClient(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Constraint classes the repositories distinguish from generic failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Violation {
    Unique,
    ForeignKey,
}

impl Violation {
    fn from_sqlstate(code: &str) -> Option<Self> {
        match code {
            UNIQUE_VIOLATION => Some(Violation::Unique),
            FOREIGN_KEY_VIOLATION => Some(Violation::ForeignKey),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        let violation = err
            .as_database_error()
            .and_then(|db| db.code())
            .and_then(|code| Violation::from_sqlstate(&code));

        match violation {
            Some(Violation::Unique) => Error::DuplicateEmail(err),
            Some(Violation::ForeignKey) => Error::UnknownClient(err),
            None => Error::Database(err),
        }
    }
}
