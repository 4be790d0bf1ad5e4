//! Majority resolution over a drained window of directives
//!
//! Pure functions: the resolver use case drains a buffer and hands the
//! votes here; this module decides the majority direction and the per-vote
//! score delta.

use crate::directive::{Direction, Directive};

/// The majority decision for one resolved window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consensus {
    /// The winning direction
    pub direction: Direction,
    /// Votes for the winning direction
    pub votes: usize,
    /// Total votes in the window
    pub total: usize,
}

impl Consensus {
    /// Whether every vote in the window agreed
    pub fn is_unanimous(&self) -> bool {
        self.votes == self.total
    }
}

/// Resolve the majority direction of a window
///
/// Returns `None` for an empty window. Tie-break is explicit: when several
/// directions share the maximal count, the first direction to reach that
/// count in arrival order wins. Callers must not depend on which member of
/// a tied set is chosen beyond it being one of them.
pub fn resolve(directives: &[Directive]) -> Option<Consensus> {
    // Tally in first-seen order so the tie-break is stable for a given window.
    let mut tally: Vec<(Direction, usize)> = Vec::with_capacity(4);
    for directive in directives {
        match tally.iter_mut().find(|(d, _)| *d == directive.direction) {
            Some((_, count)) => *count += 1,
            None => tally.push((directive.direction, 1)),
        }
    }

    let mut winner: Option<(Direction, usize)> = None;
    for &(direction, count) in &tally {
        if winner.is_none_or(|(_, best)| count > best) {
            winner = Some((direction, count));
        }
    }

    winner.map(|(direction, votes)| Consensus {
        direction,
        votes,
        total: directives.len(),
    })
}

/// Score delta for a single vote: +1 for consent, -1 for dissent
///
/// Duplicate votes from the same username within one window each
/// contribute independently.
pub fn score_delta(voted: Direction, consensus: Direction) -> i64 {
    if voted == consensus { 1 } else { -1 }
}
