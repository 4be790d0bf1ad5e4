//! Action sink adapters

pub mod cliclick;
pub mod dry_run;

pub use cliclick::CliclickActionSink;
pub use dry_run::DryRunActionSink;
