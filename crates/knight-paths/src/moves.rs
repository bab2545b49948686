use knight_core::{Board, Square};

use crate::traits::Pather;

/// The eight knight jumps as `(dx, dy)` offsets.
pub const KNIGHT_MOVES: [(i32, i32); 8] = [
    (2, -1),
    (2, 1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Squares a knight on `sq` can jump to without leaving `board`, in
/// [`KNIGHT_MOVES`] order.
pub fn knight_moves(sq: Square, board: Board) -> impl Iterator<Item = Square> {
    KNIGHT_MOVES
        .into_iter()
        .filter_map(move |(dx, dy)| sq.checked_shift(dx, dy))
        .filter(move |&n| board.contains(n))
}

/// The knight-move graph restricted to one [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightPather {
    board: Board,
}

impl KnightPather {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }
}

impl Pather for KnightPather {
    fn neighbors(&self, p: Square, buf: &mut Vec<Square>) {
        buf.extend(knight_moves(p, self.board));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_all_knight_jumps() {
        let set: HashSet<_> = KNIGHT_MOVES.iter().copied().collect();
        assert_eq!(set.len(), 8);
        for (dx, dy) in KNIGHT_MOVES {
            let (ax, ay) = (dx.abs(), dy.abs());
            assert!((ax, ay) == (1, 2) || (ax, ay) == (2, 1));
        }
    }

    #[test]
    fn corner_has_two_moves() {
        let got: Vec<_> = knight_moves(Square::new(0, 0), Board::standard()).collect();
        assert_eq!(got, vec![Square::new(2, 1), Square::new(1, 2)]);
    }

    #[test]
    fn centre_has_eight_moves() {
        assert_eq!(knight_moves(Square::new(4, 4), Board::standard()).count(), 8);
    }

    #[test]
    fn small_board_centre_is_isolated() {
        assert_eq!(knight_moves(Square::new(1, 1), Board::new(3)).count(), 0);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let board = Board::new(i32::MAX);
        let sq = Square::new(i32::MAX - 1, i32::MAX - 1);
        let got: Vec<_> = knight_moves(sq, board).collect();
        assert_eq!(
            got,
            vec![
                Square::new(i32::MAX - 3, i32::MAX - 2),
                Square::new(i32::MAX - 2, i32::MAX - 3),
            ]
        );
    }

    #[test]
    fn pather_appends() {
        let pather = KnightPather::new(Board::new(8));
        let mut buf = vec![Square::new(9, 9)];
        pather.neighbors(Square::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[0], Square::new(9, 9));
    }
}
