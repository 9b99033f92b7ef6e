//! Immutable board snapshots, one per move.

use super::{Board, Position};
use serde::{Deserialize, Serialize};

/// The board after a given move, plus the cell that move took.
///
/// The initial snapshot holds the empty board and no last move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty board before any move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// A snapshot produced by playing `last_move`.
    pub fn after_move(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// The board at this point in the game.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell played to reach this snapshot.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
