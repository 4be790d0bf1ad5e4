//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for crowd-helm
#[derive(Parser, Debug)]
#[command(name = "crowd-helm")]
#[command(author, version, about = "Crowd-play consensus engine - two teams vote, majority steers")]
#[command(long_about = r#"
crowd-helm aggregates per-user movement votes for two teams (red / white),
resolves each team's majority direction once per consensus window, keeps a
per-user agreement score, and injects one key press per resolved window.

Control protocol on stdin:
  <empty line>                       start the round (3..2..1 countdown)
  win <team>                         end the round, <team> wins
  vote <team> {"username":..,"direction":..}
  <team> <username> <direction>      vote shorthand

Configuration is loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./helm.toml         Project-level config
3. Built-in defaults

Example:
  crowd-helm --dry-run
  crowd-helm --window-ms 5000 -vv
"#)]
pub struct Cli {
    /// Consensus window override in milliseconds
    #[arg(long, value_name = "MS")]
    pub window_ms: Option<u64>,

    /// Log key presses instead of spawning the injection tool
    #[arg(long)]
    pub dry_run: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["crowd-helm"]);
        assert_eq!(cli.window_ms, None);
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["crowd-helm", "--window-ms", "5000", "--dry-run", "-vv"]);
        assert_eq!(cli.window_ms, Some(5_000));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
    }
}
