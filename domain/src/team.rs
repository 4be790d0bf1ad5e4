//! Team identity
//!
//! Two disjoint voting pools. Each team owns its own directive buffer,
//! score ledger, and consensus cadence; nothing is shared across teams
//! except the game epoch.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two voting pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Red,
    White,
}

impl Team {
    /// Both teams, in display order
    pub const ALL: [Team; 2] = [Team::Red, Team::White];

    /// Human-readable team name (e.g. "Team Red")
    pub fn display_name(&self) -> &'static str {
        match self {
            Team::Red => "Team Red",
            Team::White => "Team White",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::White => write!(f, "white"),
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Team::Red),
            "white" => Ok(Team::White),
            other => Err(DomainError::UnknownTeam(other.to_string())),
        }
    }
}
