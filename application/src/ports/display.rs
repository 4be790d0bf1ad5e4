//! Display sink port
//!
//! Write-only presentation callbacks: per-vote echoes, window summaries,
//! countdown ticks, and round banners. There is no ordering contract
//! across teams. Implementations live in the presentation layer.

use helm_domain::{Direction, Team, TeamStandings, WindowSummary};

/// Callback surface for everything the engine wants shown
pub trait DisplaySink: Send + Sync {
    /// A vote was accepted into a team's buffer
    fn vote_echo(&self, team: Team, username: &str, direction: Direction);

    /// A window was resolved: consensus, scores, current best and worst
    fn window_summary(&self, team: Team, summary: &WindowSummary);

    /// Prompt shown while waiting for a start signal
    fn start_prompt(&self);

    /// One countdown tick, `remaining` seconds to go
    fn countdown_tick(&self, remaining: u64);

    /// The countdown finished and votes are now accepted
    fn round_started(&self);

    /// The round ended: winner banner plus per-team standings
    fn round_over(&self, winner: Team, standings: &[TeamStandings]);
}

/// No-op display for when output is not needed
pub struct NoDisplay;

impl DisplaySink for NoDisplay {
    fn vote_echo(&self, _team: Team, _username: &str, _direction: Direction) {}
    fn window_summary(&self, _team: Team, _summary: &WindowSummary) {}
    fn start_prompt(&self) {}
    fn countdown_tick(&self, _remaining: u64) {}
    fn round_started(&self) {}
    fn round_over(&self, _winner: Team, _standings: &[TeamStandings]) {}
}
