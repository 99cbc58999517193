use std::fmt;

use super::{Color, Coord};
use crate::error::BoardError;

/// Handle to a marble owned by a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarbleId(usize);

/// A colored token sitting on exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marble {
    color: Color,
    coord: Coord,
}

impl Marble {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The field this marble would land on after a `delta` step
    pub fn destination(&self, delta: Coord) -> Coord {
        self.coord + delta
    }
}

/// What a field shows when printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Marble(Color),
    Cursor,
    Empty,
    Invalid,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Marble(color) => color.symbol(),
            Glyph::Cursor => 'c',
            Glyph::Empty => 'o',
            Glyph::Invalid => ' ',
        }
    }
}

/// One cell of the bounding square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    coord: Coord,
    valid: bool,
    occupants: Vec<MarbleId>,
    cursor: bool,
}

impl Field {
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Occupants in placement order; the last one is on top
    pub fn occupants(&self) -> &[MarbleId] {
        &self.occupants
    }

    pub fn top(&self) -> Option<MarbleId> {
        self.occupants.last().copied()
    }

    pub fn has_cursor(&self) -> bool {
        self.cursor
    }
}

/// The hex playing surface carved out of the square `[-radius, radius]²`.
///
/// Every coordinate of the square has a [`Field`]; the cut-off corners are
/// kept as invalid fields so lookups never miss. The board owns all marbles
/// and is the only place occupancy changes, so a marble's coordinate and its
/// field's occupant list always agree between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    radius: i32,
    fields: Vec<Field>,
    marbles: Vec<Marble>,
}

impl Board {
    /// Largest radius a board is built with.
    pub const MAX_RADIUS: i32 = 12;

    /// Create an empty board. The radius is clamped to `0..=MAX_RADIUS`.
    pub fn new(radius: i32) -> Self {
        let radius = radius.clamp(0, Self::MAX_RADIUS);
        let side = (2 * radius + 1) as usize;
        let mut board = Board {
            radius,
            fields: Vec::with_capacity(side * side),
            marbles: Vec::new(),
        };
        for j in -radius..=radius {
            for i in -radius..=radius {
                let valid = board.is_valid(i, j);
                board.fields.push(Field {
                    coord: Coord::new(i, j),
                    valid,
                    occupants: Vec::new(),
                    cursor: false,
                });
            }
        }
        board
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// True iff both components lie in `[-radius, radius]`.
    pub fn is_in_bounds(&self, i: i32, j: i32) -> bool {
        (-self.radius..=self.radius).contains(&i) && (-self.radius..=self.radius).contains(&j)
    }

    /// True iff `(i, j)` is on the hex surface: in bounds and not in one of
    /// the two corners where the components have opposite signs.
    pub fn is_valid(&self, i: i32, j: i32) -> bool {
        self.is_in_bounds(i, j) && !(i * j < 0 && i.abs() + j.abs() > self.radius - 1)
    }

    pub fn is_valid_coord(&self, coord: Coord) -> bool {
        self.is_valid(coord.i, coord.j)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if !self.is_in_bounds(coord.i, coord.j) {
            return None;
        }
        let side = 2 * self.radius + 1;
        Some(((coord.j + self.radius) * side + (coord.i + self.radius)) as usize)
    }

    fn out_of_range(&self, coord: Coord) -> BoardError {
        BoardError::InvalidCoordinate {
            coord,
            radius: self.radius,
        }
    }

    /// Get the field at `coord`, valid or not
    pub fn field(&self, coord: Coord) -> Result<&Field, BoardError> {
        match self.index(coord) {
            Some(idx) => Ok(&self.fields[idx]),
            None => Err(self.out_of_range(coord)),
        }
    }

    fn field_mut(&mut self, coord: Coord) -> Result<&mut Field, BoardError> {
        match self.index(coord) {
            Some(idx) => Ok(&mut self.fields[idx]),
            None => Err(self.out_of_range(coord)),
        }
    }

    /// All fields, row by row from `j = -radius`
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// True iff nothing sits on `coord`. Coordinates outside the bounding
    /// square are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.field(coord).is_ok_and(Field::is_empty)
    }

    /// Put a new marble on top of the field at `coord`.
    pub fn place(&mut self, color: Color, coord: Coord) -> Result<MarbleId, BoardError> {
        let id = MarbleId(self.marbles.len());
        self.field_mut(coord)?.occupants.push(id);
        self.marbles.push(Marble { color, coord });
        Ok(id)
    }

    /// Look up a marble. Ids are only handed out by this board.
    pub fn marble(&self, id: MarbleId) -> &Marble {
        &self.marbles[id.0]
    }

    pub fn marbles(&self) -> impl Iterator<Item = (MarbleId, &Marble)> {
        self.marbles.iter().enumerate().map(|(idx, m)| (MarbleId(idx), m))
    }

    pub fn marble_count(&self) -> usize {
        self.marbles.len()
    }

    /// The most recently placed marble on `coord`, if any
    pub fn top_marble(&self, coord: Coord) -> Option<MarbleId> {
        self.field(coord).ok().and_then(Field::top)
    }

    pub fn glyph(&self, coord: Coord) -> Result<Glyph, BoardError> {
        let field = self.field(coord)?;
        Ok(match field.top() {
            Some(id) => Glyph::Marble(self.marble(id).color),
            None if field.cursor => Glyph::Cursor,
            None if field.valid => Glyph::Empty,
            None => Glyph::Invalid,
        })
    }

    /// True iff the marble's destination is an empty playing field.
    pub fn is_move_to_free_space(&self, id: MarbleId, delta: Coord) -> bool {
        let dest = self.marble(id).destination(delta);
        self.is_valid_coord(dest) && self.is_empty(dest)
    }

    /// Move a single marble by `delta`. See [`Board::translate`].
    pub fn move_marble(&mut self, id: MarbleId, delta: Coord) -> Result<(), BoardError> {
        self.translate(&[id], delta)
    }

    /// Shift every marble in `ids` by `delta` as one update: all of them
    /// leave their fields before any of them lands.
    ///
    /// Only the bounding square is checked here. Callers decide whether the
    /// destinations are legal (valid and free) before calling.
    pub fn translate(&mut self, ids: &[MarbleId], delta: Coord) -> Result<(), BoardError> {
        if let Some(off) = ids
            .iter()
            .map(|&id| self.marble(id).destination(delta))
            .find(|&dest| self.index(dest).is_none())
        {
            return Err(self.out_of_range(off));
        }

        for &id in ids {
            let from = self.marble(id).coord;
            self.field_mut(from)?.occupants.retain(|&o| o != id);
        }
        for &id in ids {
            let dest = self.marble(id).destination(delta);
            self.marbles[id.0].coord = dest;
            self.field_mut(dest)?.occupants.push(id);
        }
        Ok(())
    }

    pub(crate) fn set_cursor(&mut self, coord: Coord, present: bool) {
        if let Ok(field) = self.field_mut(coord) {
            field.cursor = present;
        }
    }
}

/// Rows from `j = radius` down, each shifted right by `radius - j`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.radius;
        for j in (-r..=r).rev() {
            write!(f, "{}", " ".repeat((r - j) as usize))?;
            for i in -r..=r {
                let glyph = self.glyph(Coord::new(i, j)).map_err(|_| fmt::Error)?;
                write!(f, "{} ", glyph.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
