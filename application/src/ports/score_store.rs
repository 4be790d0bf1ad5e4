//! Score store port
//!
//! Each team owns one store mapping username to a running agreement score.
//! The score ledger is a thin contract over this port; the engine only
//! needs atomic per-key apply, clear, and a snapshot for display.

use async_trait::async_trait;
use helm_domain::ScoreEntry;
use thiserror::Error;

/// Errors surfaced by a score store adapter
#[derive(Error, Debug)]
pub enum ScoreStoreError {
    #[error("Score store unavailable: {0}")]
    Unavailable(String),

    #[error("Score store rejected the operation: {0}")]
    Rejected(String),
}

/// Port for a per-team key-value score store
///
/// Contract: `apply` is an atomic read-modify-write per key — concurrent
/// applications to the same username must not lose updates. Writes are
/// visible to subsequent reads within the process; no stronger consistency
/// is required.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Add `delta` to `username`'s score, initializing an absent entry to 0
    /// first. Returns the committed score.
    async fn apply(&self, username: &str, delta: i64) -> Result<i64, ScoreStoreError>;

    /// Atomically remove every entry (round start)
    async fn clear(&self) -> Result<(), ScoreStoreError>;

    /// Immutable listing of all entries, in no particular order
    ///
    /// Must not block concurrent `apply` calls beyond a short critical
    /// section.
    async fn snapshot(&self) -> Result<Vec<ScoreEntry>, ScoreStoreError>;
}
