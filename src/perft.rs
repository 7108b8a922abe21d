use crate::board::{Board, Color};
use crate::rules;

/// Counts leaf nodes of the legal move tree, cloning the board per move.
/// Start-position counts match the classical values through depth 4
/// (20 / 400 / 8902 / 197281); deeper counts diverge because this rule
/// set has no en passant.
pub fn perft(board: &Board, color: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for (sq, piece) in board.pieces() {
        if piece.color != color {
            continue;
        }
        for mv in rules::legal_moves(board, sq, true) {
            let mut child = board.clone();
            rules::apply(&mut child, mv);
            nodes += perft(&child, !color, depth - 1);
        }
    }
    nodes
}
