use std::fmt;

mod piece;

pub use piece::{Color, Piece, PieceKind, Square};

use PieceKind::*;

/// 8x8 mailbox board. `Clone` gives a fully independent copy (pieces are
/// plain values, nothing is shared), which is what the legality filter
/// relies on when it probes moves on a scratch board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            grid: [[None; 8]; 8],
        }
    }

    /// Standard starting position. Row 0 holds Black's back rank.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (col, &kind) in back_rank.iter().enumerate() {
            board.set(Square::new(0, col as i8), Some(Piece::new(kind, Color::Black)));
            board.set(Square::new(7, col as i8), Some(Piece::new(kind, Color::White)));
        }
        for col in 0..8 {
            board.set(Square::new(1, col), Some(Piece::new(Pawn, Color::Black)));
            board.set(Square::new(6, col), Some(Piece::new(Pawn, Color::White)));
        }
        board
    }

    /// Piece at `sq`, or None when empty or out of bounds.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !sq.in_bounds() {
            return None;
        }
        self.grid[sq.row as usize][sq.col as usize]
    }

    /// Places (or clears) the contents of an in-bounds square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(sq.in_bounds(), "set out of bounds: {sq:?}");
        self.grid[sq.row as usize][sq.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.in_bounds() && self.grid[sq.row as usize][sq.col as usize].is_none()
    }

    #[inline]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is_some_and(|p| p.color != color)
    }

    #[inline]
    pub fn is_ally(&self, sq: Square, color: Color) -> bool {
        self.get(sq).is_some_and(|p| p.color == color)
    }

    /// All occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, cell)| {
                cell.map(|p| (Square::new(r as i8, c as i8), p))
            })
        })
    }

    /// Location of the king of `color`, if it is on the board at all.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.kind == King && p.color == color)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                match self.grid[row as usize][col as usize] {
                    Some(p) => write!(f, " {}", p.to_char())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_layout() {
        let board = Board::initial();
        assert_eq!(
            board.get(Square::new(0, 0)),
            Some(Piece::new(Rook, Color::Black))
        );
        assert_eq!(
            board.get(Square::new(0, 4)),
            Some(Piece::new(King, Color::Black))
        );
        assert_eq!(
            board.get(Square::new(7, 3)),
            Some(Piece::new(Queen, Color::White))
        );
        for col in 0..8 {
            assert_eq!(
                board.get(Square::new(6, col)),
                Some(Piece::new(Pawn, Color::White))
            );
        }
        // Middle of the board starts empty.
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(Square::new(row, col)));
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let board = Board::initial();
        assert_eq!(board.get(Square::new(-1, 0)), None);
        assert_eq!(board.get(Square::new(0, 8)), None);
        assert!(!board.is_empty(Square::new(8, 8)));
    }

    #[test]
    fn find_king_absent() {
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
    }
}
