//! Full-screen frames and the highest-tile milestone.

use crate::session::GameSession;

use super::board::TextBoard;

const LOGO: &str = r"
 ___   ___    __   ___
(__ \ / _ \  /. | ( _ )
 / _/( (_) )(_  _)/ _ \
(____)\___/   (_) \___/
";

const HELP: &str = "Use w/a/s/d or the arrow keys to play. Press q to quit or r to restart.";

/// Frame shown while playing: logo, score, optional message, board, help.
#[must_use]
pub fn play_frame(session: &GameSession, message: Option<&str>) -> String {
    format!(
        "{LOGO}\nScore: {}\n{}\n{}\n{HELP}\n",
        session.score(),
        message.unwrap_or(""),
        TextBoard::new(session.grid()),
    )
}

/// Frame shown once the game has ended.
#[must_use]
pub fn game_over_frame(session: &GameSession) -> String {
    format!(
        "{LOGO}\n{}\nGame over! Your score is {}. Press r to restart the game.\n",
        TextBoard::new(session.grid()),
        session.score(),
    )
}

/// Highest-tile threshold that doubles each time it is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    threshold: u32,
}

impl Milestone {
    #[must_use]
    pub fn new(threshold: u32) -> Self {
        assert!(threshold > 0, "Milestone must be positive");
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Check `highest` against the threshold.
    ///
    /// Returns a congratulation message and doubles the threshold when it is
    /// reached; `None` otherwise.
    pub fn observe(&mut self, highest: u32) -> Option<String> {
        if highest < self.threshold {
            return None;
        }
        self.threshold = self.threshold.saturating_mul(2);
        Some(format!(
            "Congratulations, your highest tile is {highest}! The new threshold is now {}.",
            self.threshold
        ))
    }
}
