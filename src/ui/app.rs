use std::io;
use std::time::Duration;

use crate::game::{Command, CommandOutcome, Direction, GameState, MoveKind, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

pub struct App {
    game: GameState,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

/// Cursor keys arranged around `s`; shifted, they move the selection.
fn direction_for(key: char) -> Option<Direction> {
    match key.to_ascii_lowercase() {
        'w' => Some(Direction::LeftUp),
        'e' => Some(Direction::RightUp),
        'a' => Some(Direction::Left),
        'd' => Some(Direction::Right),
        'z' => Some(Direction::LeftDown),
        'x' => Some(Direction::RightDown),
        _ => None,
    }
}

/// Translate a key press into a game command.
pub fn key_command(key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Char(c) => match direction_for(c) {
            Some(dir) if c.is_ascii_uppercase() => Command::MoveSelection(dir),
            Some(dir) => Command::MoveCursor(dir),
            None if c == ' ' => Command::ToggleSelect,
            None if c.eq_ignore_ascii_case(&'r') => Command::Reset,
            None => Command::Noop,
        },
        KeyCode::Enter => Command::ToggleSelect,
        KeyCode::Esc => Command::ClearSelection,
        _ => Command::Noop,
    }
}

/// Status line for a command result, if it is worth telling the player.
pub fn describe(outcome: CommandOutcome) -> Option<String> {
    match outcome {
        CommandOutcome::NothingToSelect => Some("No marble here.".to_string()),
        CommandOutcome::Move(MoveOutcome::Applied(MoveKind::InLine)) => {
            Some("Moved in line.".to_string())
        }
        CommandOutcome::Move(MoveOutcome::Applied(MoveKind::Broadside)) => {
            Some("Moved broadside.".to_string())
        }
        CommandOutcome::Move(MoveOutcome::RejectedShape(err)) => {
            Some(format!("Cannot move: {err}."))
        }
        CommandOutcome::Move(MoveOutcome::RejectedBlocked) => {
            Some("That way is blocked!".to_string())
        }
        CommandOutcome::Reset => Some("Board reset.".to_string()),
        _ => None,
    }
}

impl App {
    pub fn new(game: GameState, poll_interval: Duration) -> Self {
        App {
            game,
            poll_interval,
            should_quit: false,
            message: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if matches!(key.code, KeyCode::Char('q' | 'Q')) {
            self.should_quit = true;
            return;
        }

        let command = key_command(key);
        let outcome = self.game.apply(command);
        log::debug!("{command:?} -> {outcome:?}");
        self.message = describe(outcome);
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, &self.message);
    }
}
