//! Core game model: hex coordinates, the board and its fields, marble
//! selection with move resolution, the picking cursor, initial positions and
//! the command-driven game state.

mod board;
mod color;
mod coord;
mod cursor;
mod selection;
mod setup;
mod state;

pub use board::{Board, Field, Glyph, Marble, MarbleId};
pub use color::{Color, UnknownColor};
pub use coord::{are_collinear, Coord, Direction};
pub use cursor::Cursor;
pub use selection::{MoveKind, MoveOutcome, Selection, SelectionDisplay};
pub use setup::{Layout, Placement};
pub use state::{Command, CommandOutcome, GameState};
