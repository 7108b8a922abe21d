pub mod check;
pub mod movegen;
pub mod status;

pub use check::{is_in_check, would_expose_king};
pub use movegen::{pseudo_legal, CastlingSide, Move};
pub use status::{evaluate, has_any_legal_move, GameStatus};

use crate::board::{Board, PieceKind, Square};

/// Moves for the piece on `from`: pseudo-legal as generated, or filtered
/// down to fully legal when `filter_self_check` is set.
pub fn legal_moves(board: &Board, from: Square, filter_self_check: bool) -> Vec<Move> {
    let mut moves = pseudo_legal(board, from);
    if filter_self_check {
        if let Some(piece) = board.get(from) {
            moves.retain(|&mv| !would_expose_king(board, mv, piece.color));
        }
    }
    moves
}

/// Applies `mv` in place. Trusts the caller to pass a move that came out
/// of `legal_moves` for this board; no re-validation happens here.
///
/// Ordered steps: relocate the piece, relocate the castling rook if any,
/// mark both moved, auto-promote a pawn reaching the far back rank.
pub fn apply(board: &mut Board, mv: Move) {
    let Some(mut piece) = board.get(mv.from) else {
        return;
    };
    board.set(mv.from, None);
    piece.moved = true;
    if let Some(side) = mv.castling {
        let row = mv.from.row;
        let (rook_from, rook_to) = match side {
            CastlingSide::Kingside => (Square::new(row, 7), Square::new(row, 5)),
            CastlingSide::Queenside => (Square::new(row, 0), Square::new(row, 3)),
        };
        if let Some(mut rook) = board.get(rook_from) {
            rook.moved = true;
            board.set(rook_from, None);
            board.set(rook_to, Some(rook));
        }
    }
    if piece.kind == PieceKind::Pawn && mv.to.row == piece.color.promotion_row() {
        piece.kind = PieceKind::Queen;
    }
    board.set(mv.to, Some(piece));
}
