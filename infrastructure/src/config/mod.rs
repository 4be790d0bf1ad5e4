//! Configuration file support

pub mod file_config;
pub mod loader;

pub use file_config::{FileActionConfig, FileConfig};
pub use loader::ConfigLoader;
