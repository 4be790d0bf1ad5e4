//! Ports (boundary interfaces) for the consensus engine
//!
//! The engine talks to everything outside the core through these traits:
//! the per-team score store, the external action sink, the display surface,
//! and the clock driving the consensus cadence. Implementations (adapters)
//! live in the infrastructure and presentation layers.

pub mod action_sink;
pub mod clock;
pub mod display;
pub mod score_store;
