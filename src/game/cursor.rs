use std::fmt;

use super::{Board, Coord, Selection};

/// Pointer used to pick marbles. It only ever rests on playing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    coord: Coord,
}

impl Cursor {
    /// Place the cursor on the center field and mark it on the board.
    pub fn new(board: &mut Board) -> Self {
        board.set_cursor(Coord::ORIGIN, true);
        Cursor {
            coord: Coord::ORIGIN,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Step by `delta` if that lands on a playing field; otherwise stay put.
    /// Returns true if the cursor moved.
    pub fn move_by(&mut self, board: &mut Board, delta: Coord) -> bool {
        let target = self.coord + delta;
        if !board.is_valid_coord(target) {
            return false;
        }
        board.set_cursor(self.coord, false);
        board.set_cursor(target, true);
        self.coord = target;
        true
    }

    /// Toggle the top marble under the cursor in `selection`.
    ///
    /// Returns `None` if the field is empty, otherwise whether the marble
    /// was added.
    pub fn select(&self, board: &Board, selection: &mut Selection) -> Option<bool> {
        board
            .top_marble(self.coord)
            .map(|id| selection.toggle(id))
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cursor: {}", self.coord)
    }
}
