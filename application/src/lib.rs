//! Application layer for crowd-helm
//!
//! This crate contains use cases, port definitions, and engine
//! configuration. It depends only on the domain layer; adapters for the
//! ports live in the infrastructure layer.

pub mod cadence;
pub mod config;
pub mod ports;
pub mod score_ledger;
pub mod use_cases;

// Re-export commonly used types
pub use cadence::CadenceTimer;
pub use config::EngineConfig;
pub use ports::{
    action_sink::{ActionError, ActionSink},
    clock::{Clock, ManualClock, SystemClock},
    display::{DisplaySink, NoDisplay},
    score_store::{ScoreStore, ScoreStoreError},
};
pub use score_ledger::ScoreLedger;
pub use use_cases::TeamContext;
pub use use_cases::end_round::{EndRound, EndRoundOutcome};
pub use use_cases::ingest_directive::{DirectiveIngest, IngestOutcome, RejectReason};
pub use use_cases::resolve_window::WindowResolver;
pub use use_cases::start_round::{StartOutcome, StartRound};
