use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Axial coordinate on the hex grid.
///
/// The three axes of the grid are constant `i`, constant `j` and constant
/// `i - j`; the six neighbors of a field are one [`Direction`] step away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub i: i32,
    pub j: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { i: 0, j: 0 };

    #[inline]
    pub const fn new(i: i32, j: i32) -> Self {
        Coord { i, j }
    }

    /// True iff `other` is one of the six hex neighbors of `self`.
    pub fn is_adjacent(self, other: Coord) -> bool {
        Direction::from_delta(other - self).is_some()
    }

    /// True iff `self` is `k * step` for some `k` in `{-2, -1, 1, 2}`.
    pub fn is_small_multiple_of(self, step: Coord) -> bool {
        [-2, -1, 1, 2].iter().any(|&k| step * k == self)
    }
}

/// True iff the three coordinates share one of the three hex axes.
pub fn are_collinear(a: Coord, b: Coord, c: Coord) -> bool {
    (a.i == b.i && b.i == c.i)
        || (a.j == b.j && b.j == c.j)
        || (a.i - a.j == b.i - b.j && b.i - b.j == c.i - c.j)
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.i + rhs.i, self.j + rhs.j)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.i - rhs.i, self.j - rhs.j)
    }
}

impl Neg for Coord {
    type Output = Coord;

    #[inline]
    fn neg(self) -> Coord {
        Coord::new(-self.i, -self.j)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord::new(self.i * rhs, self.j * rhs)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((i, j): (i32, i32)) -> Self {
        Coord::new(i, j)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

/// One of the six unit steps between neighboring fields.
///
/// Names follow the text rendering, where row `j` is drawn above row `j - 1`
/// and shifted half a field to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    LeftUp,
    RightUp,
    LeftDown,
    RightDown,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::Left,
        Direction::Right,
        Direction::LeftUp,
        Direction::RightUp,
        Direction::LeftDown,
        Direction::RightDown,
    ];

    /// The `(dx, dy)` step of this direction.
    pub const fn delta(self) -> Coord {
        match self {
            Direction::Left => Coord::new(-1, 0),
            Direction::Right => Coord::new(1, 0),
            Direction::LeftUp => Coord::new(0, 1),
            Direction::RightUp => Coord::new(1, 1),
            Direction::LeftDown => Coord::new(-1, -1),
            Direction::RightDown => Coord::new(0, -1),
        }
    }

    pub fn from_delta(delta: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::LeftUp => Direction::RightDown,
            Direction::RightDown => Direction::LeftUp,
            Direction::RightUp => Direction::LeftDown,
            Direction::LeftDown => Direction::RightUp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_neighbors_are_adjacent() {
        let center = Coord::new(1, -2);
        for dir in Direction::ALL {
            assert!(center.is_adjacent(center + dir.delta()), "{:?}", dir);
        }
    }

    #[test]
    fn test_non_neighbors_within_two_are_not_adjacent() {
        let center = Coord::ORIGIN;
        let neighbors: Vec<Coord> = Direction::ALL.iter().map(|d| d.delta()).collect();
        for di in -2..=2 {
            for dj in -2..=2 {
                let offset = Coord::new(di, dj);
                if neighbors.contains(&offset) {
                    continue;
                }
                assert!(!center.is_adjacent(offset), "{offset} should not be adjacent");
            }
        }
    }

    #[test]
    fn test_square_grid_anti_diagonal_is_not_adjacent() {
        assert!(!Coord::ORIGIN.is_adjacent(Coord::new(1, -1)));
        assert!(!Coord::ORIGIN.is_adjacent(Coord::new(-1, 1)));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        for dir in Direction::ALL {
            assert_eq!(dir.delta() + dir.opposite().delta(), Coord::ORIGIN);
        }
    }

    #[test]
    fn test_collinear_on_each_axis() {
        let o = Coord::ORIGIN;
        assert!(are_collinear(o, Coord::new(0, 1), Coord::new(0, 2)));
        assert!(are_collinear(o, Coord::new(1, 0), Coord::new(2, 0)));
        assert!(are_collinear(o, Coord::new(1, 1), Coord::new(2, 2)));
        assert!(!are_collinear(o, Coord::new(1, 0), Coord::new(1, 1)));
        assert!(!are_collinear(o, Coord::new(1, -1), Coord::new(2, -2)));
    }

    #[test]
    fn test_small_multiple() {
        let step = Coord::new(1, 1);
        assert!(Coord::new(2, 2).is_small_multiple_of(step));
        assert!(Coord::new(-1, -1).is_small_multiple_of(step));
        assert!(!Coord::new(3, 3).is_small_multiple_of(step));
        assert!(!Coord::new(1, 0).is_small_multiple_of(step));
        assert!(!Coord::ORIGIN.is_small_multiple_of(step));
    }
}
