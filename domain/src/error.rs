//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Malformed directive: {0}")]
    MalformedDirective(String),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),
}
