use log::debug;
use thiserror::Error;

use crate::board::{Board, Color, Square};
use crate::rules::{self, GameStatus, Move};

/// Contract violations surfaced by the defensive `Game` layer. The raw
/// `rules::apply` stays trust-the-caller; this wrapper re-validates
/// because it is fed untrusted front-end input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no piece on {0}")]
    NoPiece(Square),
    #[error("the piece on {0} is not {1}'s to move")]
    NotYourTurn(Square, Color),
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
}

/// Whole-game state: the live board plus the side to move. Everything is
/// held here explicitly; there are no process-wide globals, and selection
/// state stays with the front-end.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Fresh game: standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Fully legal moves for the piece on `from` (empty for an empty
    /// square). Not restricted to the side to move, so a front-end can
    /// also inspect the opponent's pieces.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        rules::legal_moves(&self.board, from, true)
    }

    /// Every fully legal move for the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces()
            .filter(|(_, p)| p.color == self.turn)
            .flat_map(|(sq, _)| rules::legal_moves(&self.board, sq, true))
            .collect()
    }

    /// Status of the side to move.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board, self.turn)
    }

    /// Validates `from` -> `to` against the generated legal moves, applies
    /// it, flips the turn and evaluates the new side's status synchronously.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<GameStatus, GameError> {
        let piece = self.board.get(from).ok_or(GameError::NoPiece(from))?;
        if piece.color != self.turn {
            return Err(GameError::NotYourTurn(from, self.turn));
        }
        let mv = self
            .legal_moves(from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(GameError::IllegalMove { from, to })?;
        rules::apply(&mut self.board, mv);
        self.turn = !self.turn;
        let status = self.status();
        debug!("applied {mv}; {} to move; status {status}", self.turn);
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_square() {
        let mut game = Game::new();
        let err = game
            .try_move(Square::new(4, 4), Square::new(3, 4))
            .unwrap_err();
        assert_eq!(err, GameError::NoPiece(Square::new(4, 4)));
    }

    #[test]
    fn rejects_moving_out_of_turn() {
        let mut game = Game::new();
        let err = game
            .try_move(Square::new(1, 4), Square::new(2, 4))
            .unwrap_err();
        assert_eq!(err, GameError::NotYourTurn(Square::new(1, 4), Color::White));
    }

    #[test]
    fn rejects_off_pattern_move() {
        let mut game = Game::new();
        let err = game
            .try_move(Square::new(6, 4), Square::new(3, 4))
            .unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                from: Square::new(6, 4),
                to: Square::new(3, 4),
            }
        );
        // Failed attempts leave the turn untouched.
        assert_eq!(game.turn(), Color::White);
    }
}
