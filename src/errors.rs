use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("malformed record at {file}:{line}: {source}")]
    MalformedRecord {
        file: String,
        line: usize,
        source: ParseError,
    },

    #[error("IO error: {0}")]
    IO(#[from] IOError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid team name '{0}': letters, spaces and hyphens only, at least one letter")]
    InvalidName(String),
    #[error("invalid city '{0}': letters, spaces and hyphens only, at least one letter")]
    InvalidCity(String),
    #[error("wins + losses + draws must equal games played ({wins} + {losses} + {draws} != {games})")]
    GamesInvariant {
        games: u32,
        wins: u32,
        losses: u32,
        draws: u32,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("team '{0}' not found")]
    TeamNotFound(String),
    #[error("user '{0}' not found")]
    UserNotFound(String),
    #[error("user '{0}' is protected and cannot be deleted")]
    ProtectedUser(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("field '{field}' is not a non-negative integer: '{value}'")]
    InvalidNumber {
        field: &'static str,
        value: String,
    },
    #[error("missing ':' separator")]
    MissingSeparator,
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("{0}")]
    Msg(String),
}

impl From<std::io::Error> for IOError {
    fn from(e: std::io::Error) -> Self {
        IOError::Msg(e.to_string())
    }
}

impl From<serde_json::Error> for IOError {
    fn from(e: serde_json::Error) -> Self {
        IOError::Msg(e.to_string())
    }
}
