use super::{Board, Cursor, Direction, Layout, MoveOutcome, Selection};
use crate::error::SetupError;

/// Everything the front end can ask the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveCursor(Direction),
    MoveSelection(Direction),
    ToggleSelect,
    ClearSelection,
    Reset,
    Noop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    CursorMoved,
    CursorBlocked,
    Selected,
    Deselected,
    NothingToSelect,
    Move(MoveOutcome),
    SelectionCleared,
    Reset,
    Noop,
}

/// Board, selection and cursor of one game, plus the starting position
/// used by [`Command::Reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    selection: Selection,
    cursor: Cursor,
    initial: Board,
}

impl GameState {
    /// Build a board of `radius` with `layout` on it and the cursor on the
    /// center field.
    pub fn new(radius: i32, layout: &Layout) -> Result<Self, SetupError> {
        let mut board = Board::new(radius);
        layout.apply(&mut board)?;
        let cursor = Cursor::new(&mut board);
        log::info!(
            "new game: radius {}, {} marbles",
            board.radius(),
            board.marble_count()
        );
        Ok(GameState {
            initial: board.clone(),
            board,
            selection: Selection::new(),
            cursor,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn apply(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::MoveCursor(dir) => {
                if self.cursor.move_by(&mut self.board, dir.delta()) {
                    CommandOutcome::CursorMoved
                } else {
                    CommandOutcome::CursorBlocked
                }
            }
            Command::MoveSelection(dir) => {
                CommandOutcome::Move(self.selection.move_by(&mut self.board, dir.delta()))
            }
            Command::ToggleSelect => match self.cursor.select(&self.board, &mut self.selection) {
                Some(true) => CommandOutcome::Selected,
                Some(false) => CommandOutcome::Deselected,
                None => CommandOutcome::NothingToSelect,
            },
            Command::ClearSelection => {
                self.selection.clear();
                CommandOutcome::SelectionCleared
            }
            Command::Reset => {
                self.reset();
                CommandOutcome::Reset
            }
            Command::Noop => CommandOutcome::Noop,
        }
    }

    /// Restore the starting position, clear the selection and re-center the
    /// cursor.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.selection.clear();
        self.cursor = Cursor::new(&mut self.board);
        log::info!("game reset");
    }
}
