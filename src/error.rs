//! # Flight management errors

use sea_orm::{DbErr, SqlErr};
use std::fmt;
use thiserror::Error;

/// Result type for store operations
pub type FlightResult<T> = Result<T, FlightError>;

/// Which constraint the store rejected a statement with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityKind {
    Unique,
    ForeignKey,
    NotNull,
    Check,
    Other,
}

impl fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegrityKind::Unique => "unique",
            IntegrityKind::ForeignKey => "foreign key",
            IntegrityKind::NotNull => "not null",
            IntegrityKind::Check => "check",
            IntegrityKind::Other => "constraint",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum FlightError {
    // Input errors, raised before the store is touched
    #[error("Invalid input: {0}")]
    Validation(String),

    // Reference errors
    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    #[error("Aircraft not found: {0}")]
    AircraftNotFound(String),

    #[error("Flight not found: {0}")]
    FlightNotFound(i32),

    #[error("Pilot not found: {0}")]
    PilotNotFound(String),

    #[error("Pilot not found or inactive: {0}")]
    PilotNotFoundOrInactive(String),

    #[error("Integrity violation ({kind}): {message}")]
    Integrity { kind: IntegrityKind, message: String },

    #[error("Database error: {0}")]
    Database(DbErr),
}

impl FlightError {
    pub fn validation(message: impl Into<String>) -> Self {
        FlightError::Validation(message.into())
    }

    pub fn integrity_kind(&self) -> Option<IntegrityKind> {
        match self {
            FlightError::Integrity { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<DbErr> for FlightError {
    fn from(err: DbErr) -> Self {
        match classify(&err) {
            Some(kind) => FlightError::Integrity {
                kind,
                message: err.to_string(),
            },
            None => FlightError::Database(err),
        }
    }
}

/// Sorts a store error into a constraint kind, or `None` if it is not a
/// constraint violation at all.
fn classify(err: &DbErr) -> Option<IntegrityKind> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(IntegrityKind::Unique),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(IntegrityKind::ForeignKey),
        _ => {}
    }
    // SQLite reports the remaining kinds only in the message text
    let message = err.to_string();
    if message.contains("UNIQUE constraint failed") {
        Some(IntegrityKind::Unique)
    } else if message.contains("FOREIGN KEY constraint failed") {
        Some(IntegrityKind::ForeignKey)
    } else if message.contains("NOT NULL constraint failed") {
        Some(IntegrityKind::NotNull)
    } else if message.contains("CHECK constraint failed") {
        Some(IntegrityKind::Check)
    } else if message.contains("constraint failed") {
        Some(IntegrityKind::Other)
    } else {
        None
    }
}
