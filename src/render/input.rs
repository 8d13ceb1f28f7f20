//! Mapping keys to session commands.
//!
//! Accepted keys:
//! - `w` `a` `s` `d` for up, left, down, right (either case)
//! - `r` to reset, `q` to quit
//!
//! Arrow keys arrive as decoded key events in the terminal front end and map
//! straight to [`Command::Move`].

use crate::core::Direction;

/// A front-end command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Reset,
    Quit,
}

impl Command {
    /// Map a single character key.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key.to_ascii_lowercase() {
            'w' => Command::Move(Direction::Up),
            's' => Command::Move(Direction::Down),
            'd' => Command::Move(Direction::Right),
            'a' => Command::Move(Direction::Left),
            'r' => Command::Reset,
            'q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}
