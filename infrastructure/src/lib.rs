//! Infrastructure layer for crowd-helm
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod action;
pub mod config;
pub mod score;

// Re-export commonly used types
pub use action::{CliclickActionSink, DryRunActionSink};
pub use config::{ConfigLoader, FileActionConfig, FileConfig};
pub use score::InMemoryScoreStore;
