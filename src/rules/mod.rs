//! Game rules: the slide-and-merge transformation and random spawns.
//!
//! Both operate on a borrowed `Grid` and know nothing about score totals or
//! session status; `GameSession` composes them.

pub mod slide;
pub mod spawn;

pub use slide::{can_slide, has_legal_moves, slide, SlideOutcome};
pub use spawn::Spawner;
