//! Error types for callgrid-engine operations.

use thiserror::Error;

use crate::conflict::Rejection;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulingError {
    #[error("Invalid date format. Use YYYY-MM-DD (got '{0}')")]
    InvalidDate(String),

    #[error("Invalid time '{0}': must be one of the grid slots 10:30-19:30")]
    InvalidTime(String),

    #[error("All fields are required (missing '{0}')")]
    MissingField(&'static str),

    #[error("Invalid call type: {0}")]
    UnknownCallType(String),

    #[error("{0}")]
    Conflict(Rejection),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Coarse classification used by delivery layers to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input. Never retried, no side effect.
    Validation,
    /// The requested slot is unavailable.
    Conflict,
    /// The storage collaborator failed.
    Internal,
}

impl SchedulingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SchedulingError::InvalidDate(_)
            | SchedulingError::InvalidTime(_)
            | SchedulingError::MissingField(_)
            | SchedulingError::UnknownCallType(_) => ErrorKind::Validation,
            SchedulingError::Conflict(_) => ErrorKind::Conflict,
            SchedulingError::Storage(_) => ErrorKind::Internal,
        }
    }
}

impl From<Rejection> for SchedulingError {
    fn from(rejection: Rejection) -> Self {
        SchedulingError::Conflict(rejection)
    }
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
