//! Stdin feed protocol
//!
//! The real system feeds votes and control signals over a message
//! transport, which is out of scope here. This module parses the stdin
//! stand-in: one event per line.
//!
//! ```text
//! <empty line>                                    -> Start
//! win red                                         -> Win(Red)
//! vote white {"username":"alice","direction":"up"} -> Vote { team, record }
//! white alice up                                  -> Vote (shorthand)
//! ```

use helm_domain::{Direction, Team};
use serde_json::json;
use thiserror::Error;

/// Errors from the line protocol
#[derive(Error, Debug)]
pub enum FeedParseError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unrecognized input: {0}")]
    Unrecognized(String),
}

/// One parsed inbound event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// Start signal (no payload)
    Start,
    /// Win signal for a team
    Win(Team),
    /// A raw vote record destined for a team's ingest
    Vote { team: Team, record: String },
}

/// Parse one stdin line into a feed event
pub fn parse_line(line: &str) -> Result<FeedEvent, FeedParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(FeedEvent::Start);
    }

    let mut parts = trimmed.splitn(3, char::is_whitespace);
    let head = parts.next().unwrap_or_default();

    match head {
        "win" => {
            let team = parts.next().unwrap_or_default();
            let team = team
                .parse::<Team>()
                .map_err(|_| FeedParseError::UnknownTeam(team.to_string()))?;
            Ok(FeedEvent::Win(team))
        }
        "vote" => {
            let team = parts.next().unwrap_or_default();
            let team = team
                .parse::<Team>()
                .map_err(|_| FeedParseError::UnknownTeam(team.to_string()))?;
            let record = parts.next().unwrap_or_default().to_string();
            Ok(FeedEvent::Vote { team, record })
        }
        // Shorthand: "<team> <username> <direction>"
        _ => {
            let team = head
                .parse::<Team>()
                .map_err(|_| FeedParseError::Unrecognized(trimmed.to_string()))?;
            let (Some(username), Some(direction)) = (parts.next(), parts.next()) else {
                return Err(FeedParseError::Unrecognized(trimmed.to_string()));
            };
            // The direction is validated again at ingest; checking here
            // gives the operator an immediate error for typos.
            direction
                .trim()
                .parse::<Direction>()
                .map_err(|_| FeedParseError::Unrecognized(trimmed.to_string()))?;
            let record = json!({
                "username": username,
                "direction": direction.trim().to_lowercase(),
            })
            .to_string();
            Ok(FeedEvent::Vote { team, record })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_start() {
        assert_eq!(parse_line("").unwrap(), FeedEvent::Start);
        assert_eq!(parse_line("   ").unwrap(), FeedEvent::Start);
    }

    #[test]
    fn test_win_signal() {
        assert_eq!(parse_line("win red").unwrap(), FeedEvent::Win(Team::Red));
        assert_eq!(parse_line("win white").unwrap(), FeedEvent::Win(Team::White));
        assert!(parse_line("win blue").is_err());
    }

    #[test]
    fn test_vote_with_json_record() {
        let event = parse_line(r#"vote red {"username":"alice","direction":"up"}"#).unwrap();
        assert_eq!(
            event,
            FeedEvent::Vote {
                team: Team::Red,
                record: r#"{"username":"alice","direction":"up"}"#.to_string(),
            }
        );
    }

    #[test]
    fn test_vote_shorthand_builds_a_record() {
        let event = parse_line("white alice up").unwrap();
        let FeedEvent::Vote { team, record } = event else {
            panic!("shorthand must parse as a vote");
        };
        assert_eq!(team, Team::White);
        let parsed: serde_json::Value = serde_json::from_str(&record).unwrap();
        assert_eq!(parsed["username"], "alice");
        assert_eq!(parsed["direction"], "up");
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_line("quux").is_err());
        assert!(parse_line("red alice sideways").is_err());
        assert!(parse_line("red alice").is_err());
    }
}
