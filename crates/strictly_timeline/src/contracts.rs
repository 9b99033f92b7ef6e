//! Preconditions for playing a move.
//!
//! Checked against the snapshot the player is looking at, before the
//! engine touches its history.

use super::action::MoveError;
use super::rules::{WinResult, evaluate};
use super::{Position, Snapshot};
use tracing::instrument;

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(snapshot))]
    pub fn check(pos: Position, snapshot: &Snapshot) -> Result<(), MoveError> {
        if snapshot.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: Nobody has won in the snapshot yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with [`MoveError::GameOver`] if a line is complete.
    #[instrument(skip(snapshot))]
    pub fn check(snapshot: &Snapshot) -> Result<(), MoveError> {
        match evaluate(snapshot.board()) {
            WinResult::Win(_) => Err(MoveError::GameOver),
            WinResult::NoWinner | WinResult::Draw => Ok(()),
        }
    }
}

/// Composite precondition: the square is empty and the game is still open.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(snapshot))]
    pub fn check(pos: Position, snapshot: &Snapshot) -> Result<(), MoveError> {
        NoWinnerYet::check(snapshot)?;
        SquareIsEmpty::check(pos, snapshot)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_empty_square_is_legal() {
        assert!(LegalMove::check(Position::Center, &Snapshot::initial()).is_ok());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let board = Board::new().with_mark(Position::Center, Player::X);
        let snapshot = Snapshot::after_move(board, Position::Center);
        assert_eq!(
            LegalMove::check(Position::Center, &snapshot),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_move_after_win_rejected() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        let snapshot = Snapshot::after_move(board, Position::TopRight);
        // The game-over check wins over the occupancy check.
        assert_eq!(
            LegalMove::check(Position::TopLeft, &snapshot),
            Err(MoveError::GameOver)
        );
        assert_eq!(
            LegalMove::check(Position::Center, &snapshot),
            Err(MoveError::GameOver)
        );
    }
}
