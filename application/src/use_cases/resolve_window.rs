//! Window resolution use case
//!
//! Drains a team's directive buffer, computes the majority direction,
//! fans out the +1/-1 score updates, reports the window, and dispatches
//! exactly one external action.

use crate::cadence::CadenceTimer;
use crate::config::EngineConfig;
use crate::ports::action_sink::ActionSink;
use crate::ports::display::DisplaySink;
use crate::score_ledger::ScoreLedger;
use helm_domain::{DirectiveBuffer, Direction, Team, WindowSummary, consensus, key_symbol};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Resolves one team's consensus windows
///
/// Holds its team's buffer, ledger, and cadence timer by injection; the
/// other team has its own resolver and the two never touch. The drain gate
/// makes the resolver the sole, exclusive reader of buffer contents.
pub struct WindowResolver {
    team: Team,
    buffer: Arc<DirectiveBuffer>,
    ledger: Arc<ScoreLedger>,
    cadence: CadenceTimer,
    actions: Arc<dyn ActionSink>,
    display: Arc<dyn DisplaySink>,
    config: EngineConfig,
    gate: tokio::sync::Mutex<()>,
}

impl WindowResolver {
    pub fn new(
        team: Team,
        buffer: Arc<DirectiveBuffer>,
        ledger: Arc<ScoreLedger>,
        cadence: CadenceTimer,
        actions: Arc<dyn ActionSink>,
        display: Arc<dyn DisplaySink>,
        config: EngineConfig,
    ) -> Self {
        Self {
            team,
            buffer,
            ledger,
            cadence,
            actions,
            display,
            config,
            gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn buffer(&self) -> &Arc<DirectiveBuffer> {
        &self.buffer
    }

    pub fn ledger(&self) -> &Arc<ScoreLedger> {
        &self.ledger
    }

    /// Has this team's consensus window elapsed since its last resolution?
    pub fn is_due(&self) -> bool {
        self.cadence.is_due()
    }

    /// Resolve the current window, if there is anything to resolve
    ///
    /// Returns the consensus direction when a window was processed, `None`
    /// when the buffer was empty or another resolution was already in
    /// flight for this team. An empty drain does not reset the cadence
    /// timer, so the next vote after a quiet window resolves immediately.
    pub async fn resolve(&self) -> Option<Direction> {
        // Exclusive drain: if a resolution is already running for this
        // team, skip rather than queue. A stuck action sink therefore
        // stalls only its own team's next resolution.
        let _gate = self.gate.try_lock().ok()?;

        let drained = self.buffer.drain_and_clear();
        let consensus = match consensus::resolve(&drained) {
            Some(c) => c,
            None => {
                debug!("team {}: empty window, nothing to resolve", self.team);
                return None;
            }
        };

        info!(
            "team {}: consensus {} ({}/{} votes)",
            self.team, consensus.direction, consensus.votes, consensus.total
        );

        self.apply_scores(&drained, consensus.direction).await;
        self.report_window(consensus).await;
        self.dispatch(consensus.direction).await;

        // The window was consumed, successfully or not.
        self.cadence.reset();
        Some(consensus.direction)
    }

    /// Fan out one score update per drained directive
    ///
    /// Updates run concurrently; the store port keeps them linearizable per
    /// username. A failed update is logged and the rest of the window
    /// proceeds (partial-failure tolerant, not all-or-nothing).
    async fn apply_scores(&self, drained: &[helm_domain::Directive], winner: Direction) {
        let mut applies = JoinSet::new();

        for directive in drained {
            let ledger = Arc::clone(&self.ledger);
            let username = directive.username.clone();
            let delta = consensus::score_delta(directive.direction, winner);

            applies.spawn(async move {
                let result = ledger.apply(&username, delta).await;
                (username, delta, result)
            });
        }

        while let Some(joined) = applies.join_next().await {
            match joined {
                Ok((username, delta, Ok(score))) => {
                    debug!("{} {:+} -> {}", username, delta, score);
                }
                Ok((username, _, Err(e))) => {
                    warn!("score update for {} failed: {}", username, e);
                }
                Err(e) => {
                    warn!("score task join error: {}", e);
                }
            }
        }
    }

    async fn report_window(&self, consensus: helm_domain::Consensus) {
        let scores = match self.ledger.snapshot().await {
            Ok(scores) => scores,
            Err(e) => {
                warn!("score snapshot for team {} failed: {}", self.team, e);
                Vec::new()
            }
        };
        let summary = WindowSummary {
            consensus,
            best: helm_domain::best(&scores),
            worst: helm_domain::worst(&scores),
            scores,
        };
        self.display.window_summary(self.team, &summary);
    }

    /// One key press per resolved window; failure is logged, never rolled
    /// back into the scores already applied.
    async fn dispatch(&self, winner: Direction) {
        let symbol = key_symbol(self.team, winner);
        if let Err(e) = self.actions.press(symbol, self.config.press_duration).await {
            error!("team {}: action dispatch '{}' failed: {}", self.team, symbol, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::action_sink::ActionError;
    use crate::ports::clock::ManualClock;
    use crate::ports::display::NoDisplay;
    use crate::ports::score_store::{ScoreStore, ScoreStoreError};
    use async_trait::async_trait;
    use helm_domain::{Directive, ScoreEntry};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MapStore {
        entries: Mutex<HashMap<String, i64>>,
        fail_user: Option<String>,
    }

    #[async_trait]
    impl ScoreStore for MapStore {
        async fn apply(&self, username: &str, delta: i64) -> Result<i64, ScoreStoreError> {
            if self.fail_user.as_deref() == Some(username) {
                return Err(ScoreStoreError::Unavailable("down".into()));
            }
            let mut entries = self.entries.lock().unwrap();
            let score = entries.entry(username.to_string()).or_insert(0);
            *score += delta;
            Ok(*score)
        }

        async fn clear(&self) -> Result<(), ScoreStoreError> {
            self.entries.lock().unwrap().clear();
            Ok(())
        }

        async fn snapshot(&self) -> Result<Vec<ScoreEntry>, ScoreStoreError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .map(|(u, s)| ScoreEntry::new(u.clone(), *s))
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        presses: Mutex<Vec<(String, Duration)>>,
        fail: bool,
    }

    #[async_trait]
    impl ActionSink for RecordingSink {
        async fn press(&self, symbol: &str, hold: Duration) -> Result<(), ActionError> {
            self.presses.lock().unwrap().push((symbol.to_string(), hold));
            if self.fail {
                Err(ActionError::Failed(1))
            } else {
                Ok(())
            }
        }
    }

    struct Rig {
        resolver: WindowResolver,
        store: Arc<MapStore>,
        sink: Arc<RecordingSink>,
        clock: Arc<ManualClock>,
    }

    fn rig(team: Team, store: MapStore, sink: RecordingSink) -> Rig {
        let clock = ManualClock::new();
        let store = Arc::new(store);
        let sink = Arc::new(sink);
        let config = EngineConfig::default();
        let resolver = WindowResolver::new(
            team,
            Arc::new(DirectiveBuffer::new()),
            Arc::new(ScoreLedger::new(team, store.clone() as Arc<dyn ScoreStore>)),
            CadenceTimer::new(config.consensus_window, clock.clone()),
            sink.clone(),
            Arc::new(NoDisplay),
            config,
        );
        Rig {
            resolver,
            store,
            sink,
            clock,
        }
    }

    fn score_of(store: &MapStore, username: &str) -> Option<i64> {
        store.entries.lock().unwrap().get(username).copied()
    }

    #[tokio::test]
    async fn test_resolution_scores_and_dispatches() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        for directive in [
            Directive::new("alice", Direction::Up),
            Directive::new("bob", Direction::Up),
            Directive::new("carol", Direction::Down),
        ] {
            rig.resolver.buffer().append(directive);
        }

        assert_eq!(rig.resolver.resolve().await, Some(Direction::Up));

        assert_eq!(score_of(&rig.store, "alice"), Some(1));
        assert_eq!(score_of(&rig.store, "bob"), Some(1));
        assert_eq!(score_of(&rig.store, "carol"), Some(-1));

        let presses = rig.sink.presses.lock().unwrap();
        assert_eq!(presses.len(), 1);
        assert_eq!(presses[0].0, "arrow-up");
        assert_eq!(presses[0].1, Duration::from_millis(125));
    }

    #[tokio::test]
    async fn test_white_team_presses_wasd() {
        let rig = rig(Team::White, MapStore::default(), RecordingSink::default());
        rig.resolver.buffer().append(Directive::new("alice", Direction::Left));

        rig.resolver.resolve().await;

        assert_eq!(rig.sink.presses.lock().unwrap()[0].0, "a");
    }

    #[tokio::test]
    async fn test_second_resolution_sees_empty_buffer() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));

        assert_eq!(rig.resolver.resolve().await, Some(Direction::Up));
        // Re-running the drain is destructive by design: nothing left.
        assert_eq!(rig.resolver.resolve().await, None);

        assert_eq!(score_of(&rig.store, "alice"), Some(1));
        assert_eq!(rig.sink.presses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_votes_each_count() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));
        rig.resolver.buffer().append(Directive::new("alice", Direction::Down));

        rig.resolver.resolve().await;

        // +1, +1, -1 applied independently
        assert_eq!(score_of(&rig.store, "alice"), Some(1));
    }

    #[tokio::test]
    async fn test_empty_drain_leaves_timer_untouched() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        rig.clock.advance(Duration::from_secs(10));
        assert!(rig.resolver.is_due());

        assert_eq!(rig.resolver.resolve().await, None);
        // Still due: an empty window must not starve future resolutions.
        assert!(rig.resolver.is_due());
    }

    #[tokio::test]
    async fn test_successful_resolution_resets_timer() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        rig.clock.advance(Duration::from_secs(10));
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));

        rig.resolver.resolve().await;

        assert!(!rig.resolver.is_due());
        rig.clock.advance(EngineConfig::default().consensus_window);
        assert!(rig.resolver.is_due());
    }

    #[tokio::test]
    async fn test_sink_failure_does_not_roll_back_scores() {
        let sink = RecordingSink {
            fail: true,
            ..Default::default()
        };
        let rig = rig(Team::Red, MapStore::default(), sink);
        rig.clock.advance(Duration::from_secs(10));
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));

        // Dispatch fails but the window still counts as processed.
        assert_eq!(rig.resolver.resolve().await, Some(Direction::Up));
        assert_eq!(score_of(&rig.store, "alice"), Some(1));
        assert!(!rig.resolver.is_due());
    }

    #[tokio::test]
    async fn test_failed_user_does_not_abort_window() {
        let store = MapStore {
            fail_user: Some("bob".to_string()),
            ..Default::default()
        };
        let rig = rig(Team::Red, store, RecordingSink::default());
        rig.resolver.buffer().append(Directive::new("alice", Direction::Up));
        rig.resolver.buffer().append(Directive::new("bob", Direction::Up));

        rig.resolver.resolve().await;

        assert_eq!(score_of(&rig.store, "alice"), Some(1));
        assert_eq!(score_of(&rig.store, "bob"), None);
        assert_eq!(rig.sink.presses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_resolutions_drain_once() {
        let rig = rig(Team::Red, MapStore::default(), RecordingSink::default());
        let resolver = Arc::new(rig.resolver);
        resolver.buffer().append(Directive::new("alice", Direction::Up));

        let a = tokio::spawn({
            let resolver = Arc::clone(&resolver);
            async move { resolver.resolve().await }
        });
        let b = tokio::spawn({
            let resolver = Arc::clone(&resolver);
            async move { resolver.resolve().await }
        });

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        // Exactly one of the two saw the vote; the other hit the gate or
        // an already-empty buffer.
        assert!(a.is_some() ^ b.is_some());
        assert_eq!(score_of(&rig.store, "alice"), Some(1));
        assert_eq!(rig.sink.presses.lock().unwrap().len(), 1);
    }
}
