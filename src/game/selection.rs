use std::fmt;

use super::coord::are_collinear;
use super::{Board, Coord, MarbleId};
use crate::error::SelectionError;

/// How an applied move translated the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Along the line the marbles form; only the head needs a free field.
    InLine,
    /// Sideways (or a single marble); every marble needs a free field.
    Broadside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied(MoveKind),
    RejectedShape(SelectionError),
    RejectedBlocked,
}

/// The marbles currently chosen to move together, in the order they were
/// picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    marbles: Vec<MarbleId>,
}

impl Selection {
    pub fn new() -> Self {
        Selection::default()
    }

    /// Add `id` if absent, remove it if present. Returns true if it was added.
    pub fn toggle(&mut self, id: MarbleId) -> bool {
        if let Some(pos) = self.marbles.iter().position(|&m| m == id) {
            self.marbles.remove(pos);
            false
        } else {
            self.marbles.push(id);
            true
        }
    }

    pub fn contains(&self, id: MarbleId) -> bool {
        self.marbles.contains(&id)
    }

    pub fn marbles(&self) -> &[MarbleId] {
        &self.marbles
    }

    pub fn len(&self) -> usize {
        self.marbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marbles.is_empty()
    }

    pub fn clear(&mut self) {
        self.marbles.clear();
    }

    /// Text listing of the selected coordinates
    pub fn display<'a>(&'a self, board: &'a Board) -> SelectionDisplay<'a> {
        SelectionDisplay {
            selection: self,
            board,
        }
    }

    fn coords(&self, board: &Board) -> Vec<Coord> {
        self.marbles.iter().map(|&id| board.marble(id).coord()).collect()
    }

    /// Check that the selection forms a movable group: one marble on a
    /// playing field, two neighbors, or three neighbors in a straight line.
    pub fn validate(&self, board: &Board) -> Result<(), SelectionError> {
        match self.coords(board).as_slice() {
            [] => Err(SelectionError::Empty),
            [a] => {
                if board.is_valid_coord(*a) {
                    Ok(())
                } else {
                    Err(SelectionError::OffBoard)
                }
            }
            [a, b] => {
                if a.is_adjacent(*b) {
                    Ok(())
                } else {
                    Err(SelectionError::NotAdjacent)
                }
            }
            [a, b, c] => {
                let links = [a.is_adjacent(*b), b.is_adjacent(*c), c.is_adjacent(*a)]
                    .iter()
                    .filter(|&&linked| linked)
                    .count();
                if links < 2 {
                    Err(SelectionError::NotAdjacent)
                } else if !are_collinear(*a, *b, *c) {
                    Err(SelectionError::NotInLine)
                } else {
                    Ok(())
                }
            }
            more => Err(SelectionError::TooMany(more.len())),
        }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        self.validate(board).is_ok()
    }

    /// True iff `delta` runs along the line through the first two selected
    /// marbles. Requires at least two marbles.
    pub fn is_along_axis(&self, board: &Board, delta: Coord) -> bool {
        match self.marbles.as_slice() {
            [first, second, ..] => {
                let axis = board.marble(*second).coord() - board.marble(*first).coord();
                axis.is_small_multiple_of(delta)
            }
            _ => false,
        }
    }

    /// Try to move the whole selection by `delta`.
    ///
    /// Nothing on the board changes unless the outcome is
    /// [`MoveOutcome::Applied`], in which case the selection is also cleared.
    pub fn move_by(&mut self, board: &mut Board, delta: Coord) -> MoveOutcome {
        if let Err(err) = self.validate(board) {
            log::debug!("selection rejected: {err}");
            return MoveOutcome::RejectedShape(err);
        }

        let kind = if self.len() >= 2 && self.is_along_axis(board, delta) {
            MoveKind::InLine
        } else {
            MoveKind::Broadside
        };

        let clear = match kind {
            MoveKind::Broadside => self
                .marbles
                .iter()
                .all(|&id| board.is_move_to_free_space(id, delta)),
            MoveKind::InLine => self
                .leaders(board, delta)
                .into_iter()
                .all(|id| board.is_move_to_free_space(id, delta)),
        };
        if !clear {
            log::debug!("{kind:?} move by {delta} blocked");
            return MoveOutcome::RejectedBlocked;
        }

        if let Err(err) = board.translate(&self.marbles, delta) {
            log::debug!("{kind:?} move by {delta} rejected: {err}");
            return MoveOutcome::RejectedBlocked;
        }
        self.clear();
        MoveOutcome::Applied(kind)
    }

    /// Marbles whose destination is not vacated by another selected marble.
    /// For a unit step along the line this is exactly the head.
    fn leaders(&self, board: &Board, delta: Coord) -> Vec<MarbleId> {
        let coords = self.coords(board);
        self.marbles
            .iter()
            .filter(|&&id| !coords.contains(&board.marble(id).destination(delta)))
            .copied()
            .collect()
    }
}

pub struct SelectionDisplay<'a> {
    selection: &'a Selection,
    board: &'a Board,
}

impl fmt::Display for SelectionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selection:")?;
        for &id in self.selection.marbles() {
            writeln!(f, "{}", self.board.marble(id).coord())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Color, Direction};

    fn board_with(radius: i32, coords: &[(i32, i32)]) -> (Board, Vec<MarbleId>) {
        let mut board = Board::new(radius);
        let ids = coords
            .iter()
            .map(|&c| board.place(Color::Black, c.into()).unwrap())
            .collect();
        (board, ids)
    }

    fn select(ids: &[MarbleId]) -> Selection {
        let mut selection = Selection::new();
        for &id in ids {
            selection.toggle(id);
        }
        selection
    }

    fn positions(board: &Board, ids: &[MarbleId]) -> Vec<Coord> {
        ids.iter().map(|&id| board.marble(id).coord()).collect()
    }

    #[test]
    fn test_toggle_is_xor() {
        let (_, ids) = board_with(2, &[(0, 0), (1, 0)]);
        let mut selection = Selection::new();
        assert!(selection.toggle(ids[0]));
        assert!(selection.toggle(ids[1]));
        assert!(!selection.toggle(ids[0]));
        assert_eq!(selection.marbles(), &[ids[1]]);
        assert!(!selection.contains(ids[0]));
    }

    #[test]
    fn test_empty_and_oversized_selection_are_invalid() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(Selection::new().validate(&board), Err(SelectionError::Empty));
        assert_eq!(select(&ids).validate(&board), Err(SelectionError::TooMany(4)));
    }

    #[test]
    fn test_single_marble_selection() {
        let (board, ids) = board_with(2, &[(1, 1)]);
        assert!(select(&ids).is_valid(&board));
    }

    #[test]
    fn test_single_marble_on_cut_corner_is_invalid() {
        let (board, ids) = board_with(2, &[(2, -1)]);
        assert_eq!(select(&ids).validate(&board), Err(SelectionError::OffBoard));
    }

    #[test]
    fn test_pair_valid_for_all_six_neighbors() {
        for dir in Direction::ALL {
            let d = dir.delta();
            let (board, ids) = board_with(3, &[(0, 0), (d.i, d.j)]);
            assert!(select(&ids).is_valid(&board), "{:?}", dir);
        }
    }

    #[test]
    fn test_pair_invalid_for_non_neighbors() {
        for di in -2..=2 {
            for dj in -2..=2 {
                let offset = Coord::new(di, dj);
                if offset == Coord::ORIGIN || Direction::from_delta(offset).is_some() {
                    continue;
                }
                let (board, ids) = board_with(3, &[(0, 0), (di, dj)]);
                assert_eq!(
                    select(&ids).validate(&board),
                    Err(SelectionError::NotAdjacent),
                    "offset {offset}"
                );
            }
        }
    }

    #[test]
    fn test_straight_triples_on_every_axis() {
        for dir in [Direction::Right, Direction::LeftUp, Direction::RightUp] {
            let d = dir.delta();
            let (board, ids) = board_with(3, &[(0, 0), (d.i, d.j), (2 * d.i, 2 * d.j)]);
            assert!(select(&ids).is_valid(&board), "{:?}", dir);
            // order of picking does not matter
            assert!(select(&[ids[2], ids[0], ids[1]]).is_valid(&board));
        }
    }

    #[test]
    fn test_triangle_is_rejected() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (1, 1)]);
        assert_eq!(select(&ids).validate(&board), Err(SelectionError::NotInLine));
    }

    #[test]
    fn test_collinear_but_disconnected_is_rejected() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (3, 0)]);
        assert_eq!(select(&ids).validate(&board), Err(SelectionError::NotAdjacent));
    }

    #[test]
    fn test_bent_chain_is_rejected() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (1, 2)]);
        assert!(!select(&ids).is_valid(&board));
        let (board, ids) = board_with(3, &[(-1, 0), (0, 0), (0, 1)]);
        assert_eq!(select(&ids).validate(&board), Err(SelectionError::NotInLine));
    }

    #[test]
    fn test_validity_is_pure() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (2, 0)]);
        let selection = select(&ids);
        let before = board.clone();
        assert_eq!(selection.validate(&board), selection.validate(&board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_along_axis() {
        let (board, ids) = board_with(3, &[(0, 0), (1, 0), (2, 0)]);
        let selection = select(&ids);
        assert!(selection.is_along_axis(&board, Direction::Right.delta()));
        assert!(selection.is_along_axis(&board, Direction::Left.delta()));
        assert!(!selection.is_along_axis(&board, Direction::RightUp.delta()));
        assert!(!selection.is_along_axis(&board, Direction::LeftUp.delta()));

        // first two picked are the two ends of the line
        let ends_first = select(&[ids[0], ids[2], ids[1]]);
        assert!(ends_first.is_along_axis(&board, Direction::Right.delta()));
        assert!(ends_first.is_along_axis(&board, Direction::Left.delta()));
    }

    #[test]
    fn test_inline_three_chain_moves_when_head_is_free() {
        let (mut board, ids) = board_with(4, &[(0, 0), (1, 0), (2, 0)]);
        let mut selection = select(&ids);

        let outcome = selection.move_by(&mut board, Direction::Right.delta());
        assert_eq!(outcome, MoveOutcome::Applied(MoveKind::InLine));
        assert_eq!(
            positions(&board, &ids),
            vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
        );
        assert!(board.is_empty(Coord::ORIGIN));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_inline_head_found_regardless_of_pick_order() {
        let (mut board, ids) = board_with(4, &[(0, 0), (1, 0), (2, 0)]);
        let mut selection = select(&[ids[0], ids[2], ids[1]]);

        let outcome = selection.move_by(&mut board, Direction::Right.delta());
        assert_eq!(outcome, MoveOutcome::Applied(MoveKind::InLine));
        assert_eq!(board.marble(ids[2]).coord(), Coord::new(3, 0));
    }

    #[test]
    fn test_inline_backwards_uses_the_other_end_as_head() {
        let (mut board, ids) = board_with(4, &[(0, 0), (1, 0), (2, 0)]);
        let mut selection = select(&ids);

        let outcome = selection.move_by(&mut board, Direction::Left.delta());
        assert_eq!(outcome, MoveOutcome::Applied(MoveKind::InLine));
        assert_eq!(
            positions(&board, &ids),
            vec![Coord::new(-1, 0), Coord::new(0, 0), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_inline_blocked_head_rejects_whole_move() {
        let (mut board, ids) = board_with(4, &[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let mut selection = select(&ids[..3]);
        let before = board.clone();

        let outcome = selection.move_by(&mut board, Direction::Right.delta());
        assert_eq!(outcome, MoveOutcome::RejectedBlocked);
        assert_eq!(board, before);
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_inline_off_board_is_rejected() {
        let (mut board, ids) = board_with(2, &[(1, 0), (2, 0)]);
        let mut selection = select(&ids);
        let before = board.clone();

        assert_eq!(
            selection.move_by(&mut board, Direction::Right.delta()),
            MoveOutcome::RejectedBlocked
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_broadside_pair_moves_when_both_free() {
        let (mut board, ids) = board_with(3, &[(0, 0), (1, 0)]);
        let mut selection = select(&ids);

        let outcome = selection.move_by(&mut board, Direction::LeftUp.delta());
        assert_eq!(outcome, MoveOutcome::Applied(MoveKind::Broadside));
        assert_eq!(positions(&board, &ids), vec![Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn test_broadside_is_all_or_nothing() {
        let (mut board, ids) = board_with(3, &[(0, 0), (1, 0), (1, 1)]);
        let mut selection = select(&ids[..2]);
        let before = board.clone();

        let outcome = selection.move_by(&mut board, Direction::LeftUp.delta());
        assert_eq!(outcome, MoveOutcome::RejectedBlocked);
        assert_eq!(board, before);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_broadside_triple() {
        let (mut board, ids) = board_with(4, &[(0, 0), (0, 1), (0, 2)]);
        let mut selection = select(&ids);

        let outcome = selection.move_by(&mut board, Direction::Right.delta());
        assert_eq!(outcome, MoveOutcome::Applied(MoveKind::Broadside));
        assert_eq!(
            positions(&board, &ids),
            vec![Coord::new(1, 0), Coord::new(1, 1), Coord::new(1, 2)]
        );
    }

    #[test]
    fn test_single_marble_off_board_is_noop() {
        let (mut board, ids) = board_with(2, &[(2, 0)]);
        let mut selection = select(&ids);

        let outcome = selection.move_by(&mut board, Direction::Right.delta());
        assert_eq!(outcome, MoveOutcome::RejectedBlocked);
        assert_eq!(board.marble(ids[0]).coord(), Coord::new(2, 0));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_single_marble_into_cut_corner_is_noop() {
        let (mut board, ids) = board_with(2, &[(1, 0)]);
        let mut selection = select(&ids);

        // (1, -1) has opposite signs and |i| + |j| = 2 > radius - 1
        let outcome = selection.move_by(&mut board, Direction::RightDown.delta());
        assert_eq!(outcome, MoveOutcome::RejectedBlocked);
        assert_eq!(board.marble(ids[0]).coord(), Coord::new(1, 0));
    }

    #[test]
    fn test_invalid_shape_is_rejected_without_mutation() {
        let (mut board, ids) = board_with(3, &[(0, 0), (2, 0)]);
        let mut selection = select(&ids);
        let before = board.clone();

        assert_eq!(
            selection.move_by(&mut board, Direction::LeftUp.delta()),
            MoveOutcome::RejectedShape(SelectionError::NotAdjacent)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_display_lists_coordinates() {
        let (board, ids) = board_with(2, &[(0, 0), (1, 0)]);
        let selection = select(&ids);
        assert_eq!(
            selection.display(&board).to_string(),
            "Selection:\n(0, 0)\n(1, 0)\n"
        );
    }
}
