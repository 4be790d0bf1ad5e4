//! Directive buffer
//!
//! Ordered multiset of pending votes for the current unresolved window.
//! Appended to by the vote-ingest path, drained atomically by the window
//! resolver, which is the sole reader of buffer contents.

use crate::directive::Directive;
use std::sync::{Mutex, PoisonError};

/// Per-team ordered collection of pending votes
///
/// Interior mutability so a shared reference can be appended to from the
/// ingest worker while the resolver drains. Critical sections are short;
/// the lock is never held across an await point.
#[derive(Debug, Default)]
pub struct DirectiveBuffer {
    pending: Mutex<Vec<Directive>>,
}

impl DirectiveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vote to the current window
    pub fn append(&self, directive: Directive) {
        self.lock().push(directive);
    }

    /// Atomically take the full current contents, leaving the buffer empty
    ///
    /// Returns votes in arrival order. A second drain without intervening
    /// appends returns an empty vector.
    pub fn drain_and_clear(&self) -> Vec<Directive> {
        std::mem::take(&mut *self.lock())
    }

    /// Discard all pending votes (round start)
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Directive>> {
        // A panic while holding the lock leaves plain vote data behind,
        // which is still safe to use.
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
