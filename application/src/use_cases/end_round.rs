//! Round end use case
//!
//! Accepts a win signal while ACTIVE, discards votes buffered but never
//! resolved, computes the end-of-round standings from both teams' ledgers,
//! and shows the banner. Duplicate or premature win signals are silently
//! ignored.

use crate::ports::display::DisplaySink;
use crate::use_cases::TeamContext;
use helm_domain::{GameEpoch, GamePhase, Team, TeamStandings};
use std::sync::Arc;
use tracing::{debug, info};

/// Result of a win signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndRoundOutcome {
    /// The round ended and standings were computed
    Completed(Vec<TeamStandings>),
    /// Signal arrived outside ACTIVE (stale or duplicate)
    Ignored,
}

/// Use case for ending a round on a win signal
pub struct EndRound {
    epoch: Arc<GameEpoch>,
    teams: Vec<TeamContext>,
    display: Arc<dyn DisplaySink>,
}

impl EndRound {
    pub fn new(
        epoch: Arc<GameEpoch>,
        teams: Vec<TeamContext>,
        display: Arc<dyn DisplaySink>,
    ) -> Self {
        Self {
            epoch,
            teams,
            display,
        }
    }

    /// Handle one win signal for `winner`
    ///
    /// The ACTIVE -> OVER compare-and-swap makes this idempotent: a second
    /// win signal for the same round finds the epoch already OVER, does
    /// nothing, and the leaderboard is computed exactly once.
    pub async fn execute(&self, winner: Team) -> EndRoundOutcome {
        if !self
            .epoch
            .try_transition(GamePhase::Active, GamePhase::Over)
        {
            debug!(
                "win signal for {} ignored, game is {}",
                winner,
                self.epoch.phase()
            );
            return EndRoundOutcome::Ignored;
        }

        info!("round over, {} wins", winner);

        let mut standings = Vec::with_capacity(self.teams.len());
        for team in &self.teams {
            // Votes still sitting in the buffer never reached a window;
            // they do not count toward the final standings.
            team.buffer.clear();
            standings.push(TeamStandings {
                team: team.ledger.team(),
                mvp: team.ledger.best().await,
                troll: team.ledger.worst().await,
            });
        }

        self.display.round_over(winner, &standings);
        EndRoundOutcome::Completed(standings)
    }
}
