//! Engine configuration

use std::time::Duration;

/// Tunables for the consensus engine
///
/// The consensus window is deliberately on the order of seconds: the
/// original demo value of a few tens of milliseconds resolved on nearly
/// every vote and starved the buffer of any actual crowd.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Time votes are buffered before a resolution may run
    pub consensus_window: Duration,
    /// How long a dispatched key press is held
    pub press_duration: Duration,
    /// Countdown length at round start, in whole seconds
    pub countdown_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consensus_window: Duration::from_secs(3),
            press_duration: Duration::from_millis(125),
            countdown_secs: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_seconds_scale() {
        let config = EngineConfig::default();
        assert!(config.consensus_window >= Duration::from_secs(1));
        assert_eq!(config.press_duration, Duration::from_millis(125));
        assert_eq!(config.countdown_secs, 3);
    }
}
