//! Score ledger
//!
//! Thin per-team contract over the score store port: +1/-1 applications
//! with partial-failure tolerance, leaderboard extremes with the "No one"
//! sentinel, and the once-per-round clear.

use crate::ports::score_store::{ScoreStore, ScoreStoreError};
use helm_domain::{ScoreEntry, Standout, Team};
use std::sync::Arc;
use tracing::warn;

/// Per-team username -> agreement score mapping
///
/// Owned exclusively by its team and mutated only by that team's window
/// resolver. Cleared exactly once per round start.
pub struct ScoreLedger {
    team: Team,
    store: Arc<dyn ScoreStore>,
}

impl ScoreLedger {
    pub fn new(team: Team, store: Arc<dyn ScoreStore>) -> Self {
        Self { team, store }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    /// Add `delta` to `username`'s score; absent users start from 0
    ///
    /// Atomic per key: concurrent in-flight applications for the same
    /// username must not lose updates (the store port guarantees it).
    pub async fn apply(&self, username: &str, delta: i64) -> Result<i64, ScoreStoreError> {
        self.store.apply(username, delta).await
    }

    /// Username with the highest score, or `NoOne` if the ledger is empty
    ///
    /// Never fails: a store error is logged and reported as `NoOne`.
    pub async fn best(&self) -> Standout {
        helm_domain::best(&self.snapshot_or_empty().await)
    }

    /// Username with the lowest score, or `NoOne` if the ledger is empty
    pub async fn worst(&self) -> Standout {
        helm_domain::worst(&self.snapshot_or_empty().await)
    }

    /// Empty the ledger (round start only)
    pub async fn clear(&self) -> Result<(), ScoreStoreError> {
        self.store.clear().await
    }

    /// Immutable listing of all entries for display
    pub async fn snapshot(&self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
        self.store.snapshot().await
    }

    async fn snapshot_or_empty(&self) -> Vec<ScoreEntry> {
        match self.store.snapshot().await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("score snapshot for team {} failed: {}", self.team, e);
                Vec::new()
            }
        }
    }
}
