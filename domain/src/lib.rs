//! Domain layer for crowd-helm
//!
//! This crate contains the core business logic of the directive consensus
//! engine. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Directive
//!
//! One viewer's single vote for a movement direction. Directives stream in
//! per team, are buffered over a consensus window, and are resolved into a
//! single majority direction.
//!
//! ## Teams
//!
//! Two disjoint voting pools (red / white), each with its own buffer, score
//! ledger, and cadence. They only meet at round end, when the winner is
//! announced.
//!
//! ## Game Epoch
//!
//! The round lifecycle shared by both teams:
//! `WAITING -> COUNTDOWN -> ACTIVE -> OVER -> WAITING ...`

pub mod buffer;
pub mod consensus;
pub mod directive;
pub mod epoch;
pub mod error;
pub mod keymap;
pub mod score;
pub mod team;

// Re-export commonly used types
pub use buffer::DirectiveBuffer;
pub use consensus::{Consensus, resolve, score_delta};
pub use directive::{Direction, Directive};
pub use epoch::{GameEpoch, GamePhase};
pub use error::DomainError;
pub use keymap::key_symbol;
pub use score::{ScoreEntry, Standout, TeamStandings, WindowSummary, best, worst};
pub use team::Team;
