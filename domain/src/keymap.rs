//! Key-symbol mapping for dispatched actions
//!
//! Each team drives its own character in the external target, so the same
//! resolved direction maps to a different key symbol per team: team white
//! uses the `a`/`d`/`w`/`s` cluster, team red the arrow keys.

use crate::directive::Direction;
use crate::team::Team;

/// Map a resolved `(team, direction)` to the key symbol to press
pub fn key_symbol(team: Team, direction: Direction) -> &'static str {
    match team {
        Team::White => match direction {
            Direction::Left => "a",
            Direction::Right => "d",
            Direction::Up => "w",
            Direction::Down => "s",
        },
        Team::Red => match direction {
            Direction::Left => "arrow-left",
            Direction::Right => "arrow-right",
            Direction::Up => "arrow-up",
            Direction::Down => "arrow-down",
        },
    }
}
