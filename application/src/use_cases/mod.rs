//! Use cases for the consensus engine
//!
//! One use case per inbound edge: vote ingest, window resolution, round
//! start, and round end. Each receives its collaborators by injection.

pub mod end_round;
pub mod ingest_directive;
pub mod resolve_window;
pub mod start_round;

use crate::score_ledger::ScoreLedger;
use helm_domain::DirectiveBuffer;
use std::sync::Arc;

/// One team's round-scoped state, as seen by the lifecycle use cases
pub struct TeamContext {
    pub buffer: Arc<DirectiveBuffer>,
    pub ledger: Arc<ScoreLedger>,
}
