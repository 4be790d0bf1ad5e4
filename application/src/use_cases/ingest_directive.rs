//! Directive ingest use case
//!
//! One ingest per team: gate on the game epoch, parse the raw record, echo
//! it, buffer it, and schedule a resolution when the team's consensus
//! window is due. Resolution runs off the ingest path so a slow action
//! dispatch never blocks the next window's votes.

use crate::ports::display::DisplaySink;
use crate::use_cases::resolve_window::WindowResolver;
use helm_domain::{Directive, GameEpoch, Team};
use std::sync::Arc;
use tracing::{debug, warn};

/// Why an inbound vote was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The game epoch is not ACTIVE; votes are not accepted
    GameNotActive,
    /// The record was missing a field or carried an unknown direction
    Malformed(String),
}

/// What happened to an inbound vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Dropped before reaching the buffer
    Rejected(RejectReason),
    /// Buffered; the consensus window has not elapsed yet
    Buffered,
    /// Buffered, and a window resolution was scheduled
    ResolutionScheduled,
}

/// Per-team vote ingest
pub struct DirectiveIngest {
    team: Team,
    epoch: Arc<GameEpoch>,
    resolver: Arc<WindowResolver>,
    display: Arc<dyn DisplaySink>,
}

impl DirectiveIngest {
    pub fn new(
        team: Team,
        epoch: Arc<GameEpoch>,
        resolver: Arc<WindowResolver>,
        display: Arc<dyn DisplaySink>,
    ) -> Self {
        Self {
            team,
            epoch,
            resolver,
            display,
        }
    }

    pub fn resolver(&self) -> &Arc<WindowResolver> {
        &self.resolver
    }

    /// Process one raw vote record from the inbound feed
    pub fn process(&self, raw: &str) -> IngestOutcome {
        if !self.epoch.is_active() {
            debug!("team {}: vote dropped, game is {}", self.team, self.epoch.phase());
            return IngestOutcome::Rejected(RejectReason::GameNotActive);
        }

        let directive = match Directive::parse(raw) {
            Ok(directive) => directive,
            Err(e) => {
                warn!("team {}: malformed vote dropped: {}", self.team, e);
                return IngestOutcome::Rejected(RejectReason::Malformed(e.to_string()));
            }
        };

        self.display
            .vote_echo(self.team, &directive.username, directive.direction);
        self.resolver.buffer().append(directive);

        if self.resolver.is_due() {
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move {
                resolver.resolve().await;
            });
            return IngestOutcome::ResolutionScheduled;
        }

        IngestOutcome::Buffered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cadence::CadenceTimer;
    use crate::config::EngineConfig;
    use crate::ports::action_sink::{ActionError, ActionSink};
    use crate::ports::clock::ManualClock;
    use crate::ports::display::NoDisplay;
    use crate::ports::score_store::{ScoreStore, ScoreStoreError};
    use crate::score_ledger::ScoreLedger;
    use async_trait::async_trait;
    use helm_domain::{DirectiveBuffer, GamePhase, ScoreEntry};
    use std::time::Duration;

    struct NullStore;

    #[async_trait]
    impl ScoreStore for NullStore {
        async fn apply(&self, _username: &str, delta: i64) -> Result<i64, ScoreStoreError> {
            Ok(delta)
        }
        async fn clear(&self) -> Result<(), ScoreStoreError> {
            Ok(())
        }
        async fn snapshot(&self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
            Ok(Vec::new())
        }
    }

    struct NullSink;

    #[async_trait]
    impl ActionSink for NullSink {
        async fn press(&self, _symbol: &str, _hold: Duration) -> Result<(), ActionError> {
            Ok(())
        }
    }

    fn ingest(epoch: Arc<GameEpoch>, clock: Arc<ManualClock>) -> DirectiveIngest {
        let config = EngineConfig::default();
        let resolver = Arc::new(WindowResolver::new(
            Team::Red,
            Arc::new(DirectiveBuffer::new()),
            Arc::new(ScoreLedger::new(Team::Red, Arc::new(NullStore))),
            CadenceTimer::new(config.consensus_window, clock),
            Arc::new(NullSink),
            Arc::new(NoDisplay),
            config,
        ));
        DirectiveIngest::new(Team::Red, epoch, resolver, Arc::new(NoDisplay))
    }

    fn active_epoch() -> Arc<GameEpoch> {
        let epoch = Arc::new(GameEpoch::new());
        epoch.try_transition(GamePhase::Waiting, GamePhase::Countdown);
        epoch.try_transition(GamePhase::Countdown, GamePhase::Active);
        epoch
    }

    const VOTE: &str = r#"{"username": "alice", "direction": "up"}"#;

    #[tokio::test]
    async fn test_vote_rejected_unless_active() {
        let ingest = ingest(Arc::new(GameEpoch::new()), ManualClock::new());

        assert_eq!(
            ingest.process(VOTE),
            IngestOutcome::Rejected(RejectReason::GameNotActive)
        );
        assert!(ingest.resolver().buffer().is_empty());
    }

    #[tokio::test]
    async fn test_vote_buffered_before_window_elapses() {
        let ingest = ingest(active_epoch(), ManualClock::new());

        assert_eq!(ingest.process(VOTE), IngestOutcome::Buffered);
        assert_eq!(ingest.resolver().buffer().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_vote_never_reaches_buffer() {
        let ingest = ingest(active_epoch(), ManualClock::new());

        let outcome = ingest.process(r#"{"username": "alice"}"#);
        assert!(matches!(
            outcome,
            IngestOutcome::Rejected(RejectReason::Malformed(_))
        ));
        assert!(ingest.resolver().buffer().is_empty());
    }

    #[tokio::test]
    async fn test_resolution_scheduled_once_window_is_due() {
        let clock = ManualClock::new();
        let ingest = ingest(active_epoch(), clock.clone());

        assert_eq!(ingest.process(VOTE), IngestOutcome::Buffered);
        clock.advance(Duration::from_secs(3));
        assert_eq!(ingest.process(VOTE), IngestOutcome::ResolutionScheduled);
    }
}
