use std::fmt;

use crate::board::{Board, Color, Piece, PieceKind, Square};

/// Which wing a castling move belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// A candidate move. Plain value, generating one never touches the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub castling: Option<CastlingSide>,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            castling: None,
        }
    }

    const fn castle(from: Square, to: Square, side: CastlingSide) -> Self {
        Self {
            from,
            to,
            castling: Some(side),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

// Diagonals first, then orthogonals, so queen output is bishop + rook order.
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Pseudo-legal moves for the piece standing on `from`; empty when the
/// square is empty. Deliberately ignores whose turn it is: the check
/// oracle calls this for the side *not* to move to test attacks.
pub fn pseudo_legal(board: &Board, from: Square) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, &mut moves),
        PieceKind::Knight => leaper_moves(board, from, piece.color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRS, &mut moves),
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRS, &mut moves),
        PieceKind::Queen => sliding_moves(board, from, piece.color, &QUEEN_DIRS, &mut moves),
        PieceKind::King => {
            leaper_moves(board, from, piece.color, &KING_OFFSETS, &mut moves);
            castling_moves(board, from, piece, &mut moves);
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    let dir = piece.color.forward();
    let one = from.offset(dir, 0);
    if board.is_empty(one) {
        out.push(Move::new(from, one));
        // Double step only from an untouched pawn, through an empty square.
        let two = from.offset(2 * dir, 0);
        if !piece.moved && board.is_empty(two) {
            out.push(Move::new(from, two));
        }
    }
    // Diagonal squares only when a capture is available; no en passant.
    for dc in [-1, 1] {
        let diag = from.offset(dir, dc);
        if board.is_enemy(diag, piece.color) {
            out.push(Move::new(from, diag));
        }
    }
}

fn leaper_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in offsets {
        let to = from.offset(dr, dc);
        if to.in_bounds() && !board.is_ally(to, color) {
            out.push(Move::new(from, to));
        }
    }
}

fn sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(dr, dc) in dirs {
        let mut to = from.offset(dr, dc);
        while to.in_bounds() {
            if board.is_empty(to) {
                out.push(Move::new(from, to));
                to = to.offset(dr, dc);
                continue;
            }
            // First blocker ends the ray; capturable only if enemy.
            if board.is_enemy(to, color) {
                out.push(Move::new(from, to));
            }
            break;
        }
    }
}

/// Castling as the original rules implement it: unmoved king, unmoved rook
/// on the same row, empty squares between them. The king's start, transit
/// and destination squares are NOT tested for attacks; that incompleteness
/// is kept on purpose.
fn castling_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Move>) {
    if piece.moved {
        return;
    }
    let row = from.row;
    let unmoved_own_rook = |sq: Square| {
        board
            .get(sq)
            .is_some_and(|p| p.kind == PieceKind::Rook && p.color == piece.color && !p.moved)
    };
    if unmoved_own_rook(Square::new(row, 7))
        && board.is_empty(from.offset(0, 1))
        && board.is_empty(from.offset(0, 2))
    {
        out.push(Move::castle(from, from.offset(0, 2), CastlingSide::Kingside));
    }
    if unmoved_own_rook(Square::new(row, 0))
        && board.is_empty(from.offset(0, -1))
        && board.is_empty(from.offset(0, -2))
        && board.is_empty(from.offset(0, -3))
    {
        out.push(Move::castle(from, from.offset(0, -2), CastlingSide::Queenside));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_square_yields_no_moves() {
        let board = Board::initial();
        assert!(pseudo_legal(&board, Square::new(4, 4)).is_empty());
    }

    #[test]
    fn generation_ignores_side_to_move() {
        // Both colors generate from the same position; no turn input exists.
        let board = Board::initial();
        assert_eq!(pseudo_legal(&board, Square::new(6, 0)).len(), 2);
        assert_eq!(pseudo_legal(&board, Square::new(1, 0)).len(), 2);
    }

    #[test]
    fn generation_order_is_deterministic() {
        let board = Board::initial();
        let first = pseudo_legal(&board, Square::new(7, 1));
        let second = pseudo_legal(&board, Square::new(7, 1));
        assert_eq!(first, second);
    }
}
