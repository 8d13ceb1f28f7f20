//! Interactive terminal front end.
//!
//! Puts the terminal in raw mode, reacts to single key presses and redraws
//! the whole screen after each command.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use env_logger::Env;
use log::{debug, info};

use tile_merge::render::{game_over_frame, play_frame, Command, Milestone};
use tile_merge::{Direction, GameConfig, GameError, GameSession};

#[derive(Parser, Debug)]
#[command(name = "tile-merge", about = "Sliding-tile merge puzzle in the terminal")]
struct Args {
    /// Side length of the square grid.
    #[arg(long, default_value_t = GameConfig::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Tiles placed on the board at the start of each game.
    #[arg(long, default_value_t = GameConfig::DEFAULT_INITIAL_TILES)]
    initial_tiles: usize,

    /// RNG seed. If omitted, one is drawn at random and logged.
    #[arg(long)]
    seed: Option<u64>,

    /// First highest-tile value to celebrate; doubles each time it is reached.
    #[arg(long, default_value_t = GameConfig::DEFAULT_MILESTONE)]
    milestone: u32,
}

impl Args {
    fn config(&self) -> Result<GameConfig> {
        anyhow::ensure!(self.size > 0, "--size must be at least 1");
        anyhow::ensure!(self.milestone > 0, "--milestone must be positive");

        let mut config = GameConfig::new(self.size)
            .with_initial_tiles(self.initial_tiles)
            .with_milestone(self.milestone);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let config = args.config()?;

    let mut session = GameSession::new(config).context("failed to seed the initial board")?;
    info!("playing with seed {}", session.rng().seed());

    let mut stdout = io::stdout();
    let raw = RawTerminal::enter(&mut stdout)?;
    let result = run(&mut session, key_presses(), &mut stdout);
    drop(raw);

    info!("final score {}", session.score());
    result
}

/// Raw mode on the alternate screen, restored on drop.
struct RawTerminal;

impl RawTerminal {
    fn enter(out: &mut impl Write) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = Self;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)
            .context("failed to switch to the alternate screen")?;
        Ok(guard)
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Key presses from the terminal. Blocks on each read.
fn key_presses() -> impl Iterator<Item = io::Result<KeyEvent>> {
    std::iter::from_fn(|| Some(event::read())).filter_map(|event| match event {
        Ok(Event::Key(key)) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(Ok(key))
        }
        Ok(_) => None,
        Err(err) => Some(Err(err)),
    })
}

fn key_command(key: &KeyEvent) -> Option<Command> {
    // Raw mode swallows the interrupt signal.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Direction::Up.into()),
        KeyCode::Down => Some(Direction::Down.into()),
        KeyCode::Left => Some(Direction::Left.into()),
        KeyCode::Right => Some(Direction::Right.into()),
        KeyCode::Char(c) => Command::from_key(c),
        _ => None,
    }
}

fn run(
    session: &mut GameSession,
    keys: impl IntoIterator<Item = io::Result<KeyEvent>>,
    mut out: impl Write,
) -> Result<()> {
    let mut milestone = Milestone::new(session.config().milestone);
    let mut message: Option<String> = None;

    draw(&mut out, &play_frame(session, None))?;

    for key in keys {
        let key = key.context("failed to read key")?;
        let Some(command) = key_command(&key) else {
            debug!("ignoring key {:?}", key.code);
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Reset => {
                session.restart()?;
                milestone = Milestone::new(session.config().milestone);
            }
            Command::Move(direction) => match session.make_move(direction) {
                Ok(_) => message = milestone.observe(session.highest_value()),
                Err(GameError::GridFull) => {}
                Err(err) => return Err(err.into()),
            },
        }

        if session.is_over() || !session.has_legal_moves() {
            draw(&mut out, &game_over_frame(session))?;
        } else {
            draw(&mut out, &play_frame(session, message.take().as_deref()))?;
        }
    }

    Ok(())
}

fn draw<W: Write>(out: &mut W, frame: &str) -> Result<()> {
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    // Raw mode does not return the carriage on `\n`.
    for line in frame.lines() {
        write!(out, "{line}\r\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile_merge::{GameRng, Grid};

    /// Last line of the logo, printed once per frame.
    const FRAME_MARK: &str = "(____)";

    fn press(code: KeyCode) -> io::Result<KeyEvent> {
        Ok(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn output_of(session: &mut GameSession, keys: Vec<io::Result<KeyEvent>>) -> String {
        let mut out = Vec::new();
        run(session, keys, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_key_mapping() {
        let key = |code| key_command(&KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(key(KeyCode::Up), Some(Command::Move(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(Command::Move(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Right), Some(Command::Move(Direction::Right)));
        assert_eq!(key(KeyCode::Char('a')), Some(Command::Move(Direction::Left)));
        assert_eq!(key(KeyCode::Char('r')), Some(Command::Reset));
        assert_eq!(key(KeyCode::Enter), None);
        assert_eq!(
            key_command(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
        let out = output_of(&mut session, vec![press(KeyCode::Char('q')), press(KeyCode::Right)]);

        // initial frame only
        assert_eq!(out.matches(FRAME_MARK).count(), 1);
        assert_eq!(session.moves_made(), 0);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
        let before = session.grid().clone();
        let out = output_of(&mut session, vec![press(KeyCode::Char('x')), press(KeyCode::Tab)]);

        assert_eq!(out.matches(FRAME_MARK).count(), 1);
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn test_arrow_key_moves() {
        let grid = Grid::from_rows(&[vec![2, 2], vec![0, 0]]).unwrap();
        let mut session = GameSession::from_grid(GameConfig::new(2), grid, GameRng::new(1)).unwrap();

        let out = output_of(&mut session, vec![press(KeyCode::Left)]);

        assert_eq!(session.score(), 4);
        assert_eq!(out.matches(FRAME_MARK).count(), 2);
        assert!(out.contains("Score: 4\r\n"));
    }

    #[test]
    fn test_frames_use_carriage_returns() {
        let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
        let out = output_of(&mut session, Vec::new());

        assert!(!out.replace("\r\n", "").contains('\n'));
    }

    #[test]
    fn test_read_error_is_reported() {
        let mut session = GameSession::new(GameConfig::default().with_seed(1)).unwrap();
        let keys = vec![Err(io::Error::new(io::ErrorKind::Other, "closed"))];

        assert!(run(&mut session, keys, Vec::new()).is_err());
    }

    #[test]
    fn test_stuck_board_shows_game_over() {
        let grid = Grid::from_rows(&[vec![2, 4], vec![4, 2]]).unwrap();
        let mut session = GameSession::from_grid(GameConfig::new(2), grid, GameRng::new(1)).unwrap();

        let out = output_of(&mut session, vec![press(KeyCode::Char('a'))]);
        assert!(out.contains("Game over! Your score is 0."));
    }

    #[test]
    fn test_milestone_message() {
        let grid = Grid::from_rows(&[vec![4, 4], vec![0, 0]]).unwrap();
        let config = GameConfig::new(2).with_milestone(8);
        let mut session = GameSession::from_grid(config, grid, GameRng::new(1)).unwrap();

        let out = output_of(&mut session, vec![press(KeyCode::Left)]);
        assert!(out.contains("Congratulations, your highest tile is 8!"));
    }

    #[test]
    fn test_reset_command() {
        let grid = Grid::from_rows(&[vec![2, 4], vec![4, 2]]).unwrap();
        let mut session = GameSession::from_grid(GameConfig::new(2), grid, GameRng::new(1)).unwrap();

        output_of(&mut session, vec![press(KeyCode::Char('r'))]);
        assert_eq!(session.grid().empty_count(), 2);
    }

    #[test]
    fn test_args_build_config() {
        let args = Args::parse_from(["tile-merge", "--size", "5", "--seed", "9", "--milestone", "512"]);
        let config = args.config().unwrap();

        assert_eq!(config.grid_size, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.milestone, 512);

        let zero = Args::parse_from(["tile-merge", "--size", "0"]);
        assert!(zero.config().is_err());
    }
}
