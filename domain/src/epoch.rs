//! Game epoch state machine
//!
//! One shared round lifecycle for both teams. Transitions are atomic
//! test-and-set so duplicate control signals (a second "win", a stray
//! "start") are silently ignored rather than corrupting the round.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// Round lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// No round running, waiting for a start signal
    Waiting,
    /// Start accepted, counting down; ledgers and buffers cleared at entry
    Countdown,
    /// Votes are accepted and scored
    Active,
    /// Round outcome computed and displayed; next start signal accepted
    Over,
}

impl GamePhase {
    fn as_u8(self) -> u8 {
        match self {
            GamePhase::Waiting => 0,
            GamePhase::Countdown => 1,
            GamePhase::Active => 2,
            GamePhase::Over => 3,
        }
    }

    fn from_u8(value: u8) -> GamePhase {
        match value {
            0 => GamePhase::Waiting,
            1 => GamePhase::Countdown,
            2 => GamePhase::Active,
            _ => GamePhase::Over,
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Waiting => write!(f, "waiting"),
            GamePhase::Countdown => write!(f, "countdown"),
            GamePhase::Active => write!(f, "active"),
            GamePhase::Over => write!(f, "over"),
        }
    }
}

/// Process-wide game epoch shared by both teams
///
/// A round always ends both teams' activity simultaneously, so there is a
/// single instance. All transitions go through [`GameEpoch::try_transition`];
/// a transition attempted from the wrong source phase is a no-op, which is
/// what makes duplicate win/start signals idempotent under concurrency.
#[derive(Debug)]
pub struct GameEpoch {
    phase: AtomicU8,
}

impl GameEpoch {
    /// New epoch in `Waiting`
    pub fn new() -> Self {
        Self {
            phase: AtomicU8::new(GamePhase::Waiting.as_u8()),
        }
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        GamePhase::from_u8(self.phase.load(Ordering::Acquire))
    }

    /// Whether votes are currently accepted and scored
    pub fn is_active(&self) -> bool {
        self.phase() == GamePhase::Active
    }

    /// Atomically move `from -> to`; returns whether the transition happened
    ///
    /// Compare-and-swap: acts only if the current phase equals `from`.
    /// At most one of several concurrent identical calls succeeds.
    pub fn try_transition(&self, from: GamePhase, to: GamePhase) -> bool {
        self.phase
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for GameEpoch {
    fn default() -> Self {
        Self::new()
    }
}
