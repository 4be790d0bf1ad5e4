//! Round start use case
//!
//! Accepts a start signal from WAITING or OVER, clears both teams' ledgers
//! and buffers, runs the countdown, and flips the epoch to ACTIVE.

use crate::config::EngineConfig;
use crate::ports::display::DisplaySink;
use crate::use_cases::TeamContext;
use helm_domain::{GameEpoch, GamePhase};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Result of a start signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Countdown ran and the round is now active
    Started,
    /// Signal arrived in a phase that does not accept starts
    Ignored,
}

/// Use case for starting a round
pub struct StartRound {
    epoch: Arc<GameEpoch>,
    teams: Vec<TeamContext>,
    display: Arc<dyn DisplaySink>,
    config: EngineConfig,
}

impl StartRound {
    pub fn new(
        epoch: Arc<GameEpoch>,
        teams: Vec<TeamContext>,
        display: Arc<dyn DisplaySink>,
        config: EngineConfig,
    ) -> Self {
        Self {
            epoch,
            teams,
            display,
            config,
        }
    }

    /// Handle one start signal
    ///
    /// Only WAITING and OVER accept a start; anything else is a stale or
    /// duplicate signal and is silently ignored. The compare-and-swap into
    /// COUNTDOWN means concurrent duplicate starts run the sequence once.
    pub async fn execute(&self) -> StartOutcome {
        let accepted = self
            .epoch
            .try_transition(GamePhase::Waiting, GamePhase::Countdown)
            || self
                .epoch
                .try_transition(GamePhase::Over, GamePhase::Countdown);

        if !accepted {
            debug!("start signal ignored, game is {}", self.epoch.phase());
            return StartOutcome::Ignored;
        }

        info!("round starting");

        // Ledgers and buffers are reset exactly once per round, at
        // countdown entry.
        for team in &self.teams {
            team.buffer.clear();
            if let Err(e) = team.ledger.clear().await {
                warn!("ledger clear for team {} failed: {}", team.ledger.team(), e);
            }
        }

        for remaining in (1..=self.config.countdown_secs).rev() {
            self.display.countdown_tick(remaining);
            tokio::time::sleep(Duration::from_secs(1)).await;
        }

        self.display.round_started();
        self.epoch
            .try_transition(GamePhase::Countdown, GamePhase::Active);
        StartOutcome::Started
    }
}
