//! Directive types
//!
//! A directive is one viewer's single vote for a movement direction.
//! Directives arrive as raw JSON records from the inbound vote feed;
//! malformed records are rejected here and never reach a buffer.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A movement direction voted on by viewers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Direction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(DomainError::UnknownDirection(other.to_string())),
        }
    }
}

/// One user's single vote for a movement direction
///
/// Produced externally once per vote message; immutable; consumed and
/// discarded after the window it was buffered into is resolved.
///
/// # Example
///
/// ```
/// use helm_domain::{Directive, Direction};
///
/// let vote = Directive::parse(r#"{"username": "alice", "direction": "up"}"#).unwrap();
/// assert_eq!(vote.username, "alice");
/// assert_eq!(vote.direction, Direction::Up);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// The voting user
    pub username: String,
    /// The direction they voted for
    pub direction: Direction,
}

impl Directive {
    pub fn new(username: impl Into<String>, direction: Direction) -> Self {
        Self {
            username: username.into(),
            direction,
        }
    }

    /// Parse a raw vote record from the inbound feed
    ///
    /// Records missing a field or carrying an unrecognized direction are
    /// rejected with [`DomainError::MalformedDirective`].
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        serde_json::from_str(raw).map_err(|e| DomainError::MalformedDirective(e.to_string()))
    }
}
