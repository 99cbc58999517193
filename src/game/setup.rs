//! Initial positions.
//!
//! The text format is one record per line: a color token followed by
//! space-separated `i,j` pairs, e.g. `B 0,0 1,0`. Blank lines are ignored.

use std::collections::HashSet;
use std::path::Path;

use super::{Board, Color, Coord};
use crate::error::SetupError;

/// One marble to put on the board, with the record line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub color: Color,
    pub coord: Coord,
    pub line: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    placements: Vec<Placement>,
}

impl Layout {
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Parse the record format. Only syntax is checked here; whether the
    /// coordinates fit a board is checked by [`Layout::apply`].
    pub fn parse(text: &str) -> Result<Self, SetupError> {
        let mut placements = Vec::new();
        for (idx, record) in text.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = record.split_whitespace();
            let Some(color_token) = tokens.next() else {
                continue;
            };
            let color: Color = color_token.parse().map_err(|_| SetupError::UnknownColor {
                line,
                token: color_token.to_string(),
            })?;
            for token in tokens {
                let coord = parse_coord(token).ok_or_else(|| SetupError::MalformedCoordinate {
                    line,
                    token: token.to_string(),
                })?;
                placements.push(Placement { color, coord, line });
            }
        }
        Ok(Layout { placements })
    }

    /// Read and parse a setup file.
    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path).map_err(|e| SetupError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let layout = Self::parse(&text)?;
        log::info!(
            "loaded {} marbles from {}",
            layout.placements.len(),
            path.display()
        );
        Ok(layout)
    }

    /// Starting position for `players` sides on a board of `radius`.
    ///
    /// Fields are filled row by row from the top; each field goes to the
    /// first side whose home region contains it.
    pub fn for_players(players: u8, radius: i32) -> Result<Self, SetupError> {
        let sides = home_regions(players).ok_or(SetupError::PlayerCount(players))?;
        let board = Board::new(radius);
        let radius = board.radius();
        let mut placements = Vec::new();
        for j in (-radius..=radius).rev() {
            for i in -radius..=radius {
                let coord = Coord::new(i, j);
                if !board.is_valid_coord(coord) {
                    continue;
                }
                let home = sides.iter().position(|(_, home)| home(coord, radius));
                if let Some(idx) = home {
                    placements.push(Placement {
                        color: sides[idx].0,
                        coord,
                        line: idx + 1,
                    });
                }
            }
        }
        Ok(Layout { placements })
    }

    /// Put every marble on `board`.
    ///
    /// All placements are checked first; on error the board is untouched.
    pub fn apply(&self, board: &mut Board) -> Result<(), SetupError> {
        let mut taken: HashSet<Coord> = board
            .fields()
            .filter(|f| !f.is_empty())
            .map(|f| f.coord())
            .collect();
        for p in &self.placements {
            if !board.is_valid_coord(p.coord) {
                return Err(SetupError::OffBoard {
                    line: p.line,
                    coord: p.coord,
                });
            }
            if !taken.insert(p.coord) {
                return Err(SetupError::Occupied {
                    line: p.line,
                    coord: p.coord,
                });
            }
        }

        for p in &self.placements {
            board
                .place(p.color, p.coord)
                .map_err(|_| SetupError::OffBoard {
                    line: p.line,
                    coord: p.coord,
                })?;
        }
        Ok(())
    }
}

fn parse_coord(token: &str) -> Option<Coord> {
    let (i, j) = token.split_once(',')?;
    Some(Coord::new(i.trim().parse().ok()?, j.trim().parse().ok()?))
}

type HomeRegion = fn(Coord, i32) -> bool;

static TWO_PLAYERS: [(Color, HomeRegion); 2] = [
    (Color::Black, facing_rows),
    (Color::White, |c, r| facing_rows(-c, r)),
];

static THREE_PLAYERS: [(Color, HomeRegion); 3] = [
    (Color::Black, top_edge),
    (Color::White, lower_right_edge),
    (Color::Blue, left_edge),
];

// one home and its images under point reflection and the i <-> j mirror
static FOUR_PLAYERS: [(Color, HomeRegion); 4] = [
    (Color::Blue, top_corner),
    (Color::Red, |c, r| top_corner(-c, r)),
    (Color::White, |c, r| top_corner(Coord::new(c.j, c.i), r)),
    (Color::Black, |c, r| top_corner(Coord::new(-c.j, -c.i), r)),
];

fn home_regions(players: u8) -> Option<&'static [(Color, HomeRegion)]> {
    match players {
        2 => Some(&TWO_PLAYERS),
        3 => Some(&THREE_PLAYERS),
        4 => Some(&FOUR_PLAYERS),
        _ => None,
    }
}

/// Two top rows plus the middle three fields of the third.
fn facing_rows(c: Coord, radius: i32) -> bool {
    let middle = (radius - 1) / 2;
    c.j > 0 && (c.j >= radius - 1 || (c.j == radius - 2 && (c.i - middle).abs() <= 1))
}

fn top_edge(c: Coord, radius: i32) -> bool {
    c.j > 0 && c.j >= radius - 1
}

fn lower_right_edge(c: Coord, radius: i32) -> bool {
    let diag = c.i - c.j;
    diag > 0 && diag >= radius - 1
}

fn left_edge(c: Coord, radius: i32) -> bool {
    c.i < 0 && c.i <= -(radius - 1)
}

// the part of the two top rows left of the main diagonal
fn top_corner(c: Coord, radius: i32) -> bool {
    top_edge(c, radius) && 0 <= c.i && c.i < c.j
}
