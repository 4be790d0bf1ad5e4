//! Dry-run action sink
//!
//! Logs each would-be key press instead of spawning the injection tool.
//! Useful when running the engine without a target window.

use async_trait::async_trait;
use helm_application::ports::action_sink::{ActionError, ActionSink};
use std::time::Duration;
use tracing::info;

pub struct DryRunActionSink;

#[async_trait]
impl ActionSink for DryRunActionSink {
    async fn press(&self, symbol: &str, hold: Duration) -> Result<(), ActionError> {
        info!("dry-run: press '{}' for {}ms", symbol, hold.as_millis());
        Ok(())
    }
}
