//! Game session: the lifecycle that drives the rules.
//!
//! `GameSession` owns the grid, score, highest merged value, status and
//! spawner. Front ends hold a session and call `make_move`/`reset`; they
//! only ever see the grid through `&Grid`.
//!
//! State machine:
//!
//! ```text
//!   Playable --(spawn finds no empty cell)--> Over
//!   Over     --(reset)----------------------> Playable
//! ```

mod game;

pub use game::{GameSession, MoveOutcome, SessionStatus};
