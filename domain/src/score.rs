//! Score types and leaderboard math
//!
//! A team's ledger maps username to a running agreement score. The ledger
//! itself lives behind the application's score-store port; the pure pieces
//! (entries, extremes, sentinel, round standings) live here.

use crate::consensus::Consensus;
use crate::team::Team;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ledger entry: a user's running agreement score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: i64,
}

impl ScoreEntry {
    pub fn new(username: impl Into<String>, score: i64) -> Self {
        Self {
            username: username.into(),
            score,
        }
    }
}

/// A leaderboard standout, or the sentinel when the ledger is empty
///
/// Leaderboard queries never fail: an empty ledger reports "No one" for
/// both roles rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standout {
    User(String),
    NoOne,
}

impl fmt::Display for Standout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Standout::User(username) => write!(f, "{}", username),
            Standout::NoOne => write!(f, "No one"),
        }
    }
}

/// Username with the maximum score, or `NoOne` on an empty snapshot
///
/// When several users share the extreme score the choice among them is
/// unspecified; callers must not depend on a particular winner among ties.
pub fn best(entries: &[ScoreEntry]) -> Standout {
    extreme(entries, |candidate, current| candidate.score > current.score)
}

/// Username with the minimum score, or `NoOne` on an empty snapshot
pub fn worst(entries: &[ScoreEntry]) -> Standout {
    extreme(entries, |candidate, current| candidate.score < current.score)
}

fn extreme(entries: &[ScoreEntry], beats: impl Fn(&ScoreEntry, &ScoreEntry) -> bool) -> Standout {
    let mut pick: Option<&ScoreEntry> = None;
    for entry in entries {
        if pick.is_none_or(|current| beats(entry, current)) {
            pick = Some(entry);
        }
    }
    match pick {
        Some(entry) => Standout::User(entry.username.clone()),
        None => Standout::NoOne,
    }
}

/// End-of-round standings for one team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStandings {
    pub team: Team,
    /// Agreed with the consensus the most
    pub mvp: Standout,
    /// Disagreed with the consensus the most
    pub troll: Standout,
}

/// What one resolved window looked like, for display
#[derive(Debug, Clone)]
pub struct WindowSummary {
    pub consensus: Consensus,
    /// Ledger snapshot after this window's score updates
    pub scores: Vec<ScoreEntry>,
    pub best: Standout,
    pub worst: Standout,
}
