use crate::board::{Board, Color};
use crate::rules::movegen::{pseudo_legal, Move};

/// Whether the king of `color` is attacked: some opposing piece has the
/// king's square among its pseudo-legal destinations. A board with no
/// such king reports false; that state is a caller precondition
/// violation, not something worth faulting over.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    board
        .pieces()
        .filter(|(_, p)| p.color != color)
        .any(|(sq, _)| pseudo_legal(board, sq).iter().any(|m| m.to == king_sq))
}

/// Probes `mv` on a scratch copy: would the mover's own king be in check
/// afterwards? The live board is never touched.
pub fn would_expose_king(board: &Board, mv: Move, color: Color) -> bool {
    let mut scratch = board.clone();
    super::apply(&mut scratch, mv);
    is_in_check(&scratch, color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    #[test]
    fn startpos_nobody_in_check() {
        let board = Board::initial();
        assert!(!is_in_check(&board, Color::White));
        assert!(!is_in_check(&board, Color::Black));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let mut board = Board::empty();
        board.set(
            Square::new(7, 4),
            Some(Piece::new(PieceKind::King, Color::White)),
        );
        board.set(
            Square::new(0, 4),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        assert!(is_in_check(&board, Color::White));
        // Interpose a pawn and the check disappears.
        board.set(
            Square::new(4, 4),
            Some(Piece::new(PieceKind::Pawn, Color::White)),
        );
        assert!(!is_in_check(&board, Color::White));
    }

    #[test]
    fn missing_king_reports_no_check() {
        let board = Board::empty();
        assert!(!is_in_check(&board, Color::White));
    }
}
