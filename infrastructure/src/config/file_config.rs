//! Configuration file schema

use helm_application::EngineConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// On-disk configuration (`helm.toml`)
///
/// Every field has a default so an absent or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Consensus window in milliseconds
    pub consensus_window_ms: u64,
    /// Key press hold time in milliseconds
    pub press_duration_ms: u64,
    /// Countdown length at round start, in seconds
    pub countdown_secs: u64,
    /// Action sink settings
    pub action: FileActionConfig,
}

/// Action sink section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileActionConfig {
    /// Path or name of the key-injection binary
    pub command: String,
    /// Log presses instead of spawning the binary
    pub dry_run: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            consensus_window_ms: 3_000,
            press_duration_ms: 125,
            countdown_secs: 3,
            action: FileActionConfig::default(),
        }
    }
}

impl Default for FileActionConfig {
    fn default() -> Self {
        Self {
            command: "cliclick".to_string(),
            dry_run: false,
        }
    }
}

impl FileConfig {
    /// Typed engine configuration from the raw file values
    ///
    /// A zero window would resolve on every single vote, defeating the
    /// buffering entirely; it falls back to the built-in default.
    pub fn engine(&self) -> EngineConfig {
        let consensus_window_ms = if self.consensus_window_ms == 0 {
            let fallback = FileConfig::default().consensus_window_ms;
            warn!(
                "consensus_window_ms = 0 is invalid, using default of {} ms",
                fallback
            );
            fallback
        } else {
            self.consensus_window_ms
        };
        EngineConfig {
            consensus_window: Duration::from_millis(consensus_window_ms),
            press_duration: Duration::from_millis(self.press_duration_ms),
            countdown_secs: self.countdown_secs,
        }
    }
}
