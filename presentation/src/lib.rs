//! Presentation layer for crowd-helm
//!
//! This crate contains the CLI definition, the console display sink, and
//! the stdin feed protocol used in place of a real transport.

pub mod cli;
pub mod console;
pub mod feed;

// Re-export commonly used types
pub use cli::Cli;
pub use console::ConsoleDisplay;
pub use feed::{FeedEvent, FeedParseError};
