use std::fmt;

use crate::board::{Board, Color};
use crate::rules::check::{is_in_check, would_expose_king};
use crate::rules::movegen::pseudo_legal;

/// Outcome of evaluating a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Normal,
    /// In check but at least one legal move exists.
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Normal => write!(f, "normal"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// True as soon as one move of `color` survives the self-check filter.
/// Stops at the first hit instead of enumerating everything.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, p)| p.color == color)
        .any(|(sq, _)| {
            pseudo_legal(board, sq)
                .iter()
                .any(|&mv| !would_expose_king(board, mv, color))
        })
}

/// Terminal-state decision for `color`, the side to move.
pub fn evaluate(board: &Board, color: Color) -> GameStatus {
    let in_check = is_in_check(board, color);
    if has_any_legal_move(board, color) {
        if in_check {
            GameStatus::Check
        } else {
            GameStatus::Normal
        }
    } else if in_check {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_is_normal_for_both_sides() {
        let board = Board::initial();
        assert_eq!(evaluate(&board, Color::White), GameStatus::Normal);
        assert_eq!(evaluate(&board, Color::Black), GameStatus::Normal);
    }

    #[test]
    fn empty_board_is_stalemate_shaped() {
        // No king, no pieces: no check and no moves. Degenerate input,
        // but it must not fault.
        let board = Board::empty();
        assert_eq!(evaluate(&board, Color::White), GameStatus::Stalemate);
    }
}
