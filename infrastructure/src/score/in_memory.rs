//! In-process score store
//!
//! Process-local adapter for the score-store port. Stands in for an
//! external distributed cache; provisioning one is out of scope and the
//! port keeps the seam for it.

use async_trait::async_trait;
use helm_application::ports::score_store::{ScoreStore, ScoreStoreError};
use helm_domain::ScoreEntry;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Mutex-guarded username -> score map
///
/// `apply` does its read-modify-write under the lock, which makes it
/// atomic per key; snapshots clone under the same short critical section.
#[derive(Debug, Default)]
pub struct InMemoryScoreStore {
    entries: Mutex<HashMap<String, i64>>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, i64>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ScoreStore for InMemoryScoreStore {
    async fn apply(&self, username: &str, delta: i64) -> Result<i64, ScoreStoreError> {
        let mut entries = self.lock();
        let score = entries.entry(username.to_string()).or_insert(0);
        *score += delta;
        Ok(*score)
    }

    async fn clear(&self) -> Result<(), ScoreStoreError> {
        self.lock().clear();
        Ok(())
    }

    async fn snapshot(&self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
        Ok(self
            .lock()
            .iter()
            .map(|(username, score)| ScoreEntry::new(username.clone(), *score))
            .collect())
    }
}
