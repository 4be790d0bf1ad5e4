//! Action sink port
//!
//! One resolved window becomes exactly one external action: a key press
//! held briefly then released. The sink is injected so the resolver can be
//! tested without touching a real target process.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by an action sink adapter
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Failed to invoke action sink: {0}")]
    Invocation(String),

    #[error("Action sink reported failure (exit code {0})")]
    Failed(i32),
}

/// Port for dispatching one key-press-equivalent action
///
/// The call is synchronous from the resolver's perspective: the resolver
/// waits for completion before considering its window fully processed,
/// which gives natural backpressure against runaway vote rates.
#[async_trait]
pub trait ActionSink: Send + Sync {
    /// Press `symbol`, hold for `hold`, release
    async fn press(&self, symbol: &str, hold: Duration) -> Result<(), ActionError>;
}
