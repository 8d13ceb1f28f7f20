//! Text front end: board formatting, screen frames, key mapping.
//!
//! Everything here reads a `GameSession` through its public accessors and
//! drives it through `make_move`/`reset`. No game rule lives in this module.

pub mod board;
pub mod input;
pub mod screen;

pub use board::TextBoard;
pub use input::Command;
pub use screen::{game_over_frame, play_frame, Milestone};
