use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("No dataset loaded. Upload a CSV file first")]
    NotLoaded,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("{0}")]
    Validation(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected at most {expected} fields, found {found}")]
    FieldCount { row: usize, expected: usize, found: usize },

    #[error("Row {row}: column {column} is not a number: {value:?}")]
    InvalidNumber { row: usize, column: &'static str, value: String },

    #[error("Row {row}: cannot parse timestamp {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification used by callers that map errors onto a protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No dataset has been loaded yet.
    NotLoaded,
    /// The request or the uploaded file is unacceptable as given.
    Validation,
    /// The input could not be parsed (malformed CSV, numbers, dates) or read.
    Parse,
}

impl DatasetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DatasetError::NotLoaded => ErrorKind::NotLoaded,
            DatasetError::MissingColumns(_) | DatasetError::Validation(_) => ErrorKind::Validation,
            DatasetError::Csv(_)
            | DatasetError::FieldCount { .. }
            | DatasetError::InvalidNumber { .. }
            | DatasetError::InvalidTimestamp { .. }
            | DatasetError::Io(_) => ErrorKind::Parse,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        DatasetError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
