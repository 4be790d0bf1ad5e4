//! Console display sink
//!
//! Renders vote echoes, window summaries, the countdown, and round banners
//! to the terminal. Red team lines are tinted red; white team lines stay
//! plain. No ordering contract across teams.

use colored::Colorize;
use helm_application::ports::display::DisplaySink;
use helm_domain::{Direction, ScoreEntry, Standout, Team, TeamStandings, WindowSummary};

/// ANSI clear-screen + cursor-home, used for the banner screens
const CLEAR: &str = "\x1b[H\x1b[2J";

/// Formats engine events for the terminal
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }

    fn team_tag(team: Team) -> String {
        let tag = format!("[{}]", team.display_name());
        match team {
            Team::Red => tag.red().bold().to_string(),
            Team::White => tag.white().bold().to_string(),
        }
    }

    fn format_summary(team: Team, summary: &WindowSummary) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{} Consensus: {} ({}/{} votes)\n",
            Self::team_tag(team),
            summary.consensus.direction.to_string().bold(),
            summary.consensus.votes,
            summary.consensus.total,
        ));

        let mut scores: Vec<&ScoreEntry> = summary.scores.iter().collect();
        scores.sort_by(|a, b| b.score.cmp(&a.score).then(a.username.cmp(&b.username)));
        for entry in scores {
            output.push_str(&format!("  {}: {}\n", entry.username, entry.score));
        }

        output.push_str(&format!("  Good guy: {}\n", summary.best));
        output.push_str(&format!("  Bad guy: {}\n", summary.worst));
        output
    }

    fn format_round_over(winner: Team, standings: &[TeamStandings]) -> String {
        let banner = format!("{} WINS!!!", winner.display_name().to_uppercase());
        let banner = match winner {
            Team::Red => banner.red().bold().to_string(),
            Team::White => banner.white().bold().to_string(),
        };

        let mut output = format!("{banner}\n\n");
        for team in standings {
            output.push_str(&format!("{}\n", Self::team_tag(team.team)));
            output.push_str(&format!("  MVP: {}\n", team.mvp));
            output.push_str(&format!("  Biggest Troll: {}\n\n", team.troll));
        }
        output.push_str("Press ENTER to play again, or Ctrl+C to quit\n");
        output
    }
}

impl DisplaySink for ConsoleDisplay {
    fn vote_echo(&self, team: Team, username: &str, direction: Direction) {
        println!("{} {}: {}", Self::team_tag(team), username, direction);
    }

    fn window_summary(&self, team: Team, summary: &WindowSummary) {
        print!("{}", Self::format_summary(team, summary));
    }

    fn start_prompt(&self) {
        print!("{CLEAR}");
        println!("Press ENTER to start!");
    }

    fn countdown_tick(&self, remaining: u64) {
        if remaining == 0 {
            return;
        }
        println!("{}...", remaining);
    }

    fn round_started(&self) {
        println!("{}", "Go!!".bold());
    }

    fn round_over(&self, winner: Team, standings: &[TeamStandings]) {
        print!("{CLEAR}");
        print!("{}", Self::format_round_over(winner, standings));
    }
}
