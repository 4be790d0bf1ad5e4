//! Key-injection action sink
//!
//! Dispatches a resolved window by spawning the `cliclick` key-injection
//! tool: key-down, wait, key-up. One invocation per resolved window.

use async_trait::async_trait;
use helm_application::ports::action_sink::{ActionError, ActionSink};
use std::path::PathBuf;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Action sink backed by the external `cliclick` binary
///
/// Invocation format: `cliclick kd:<symbol> w:<hold_ms> ku:<symbol>`.
pub struct CliclickActionSink {
    program: PathBuf,
}

impl CliclickActionSink {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl ActionSink for CliclickActionSink {
    async fn press(&self, symbol: &str, hold: Duration) -> Result<(), ActionError> {
        debug!("pressing '{}' for {:?}", symbol, hold);

        let status = Command::new(&self.program)
            .arg(format!("kd:{symbol}"))
            .arg(format!("w:{}", hold.as_millis()))
            .arg(format!("ku:{symbol}"))
            .status()
            .await
            .map_err(|e| ActionError::Invocation(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ActionError::Failed(status.code().unwrap_or(-1)))
        }
    }
}
