//! Derived, display-ready views of the engine state.

use super::rules::WinResult;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Status line for the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete; names the player who just moved.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full with no line.
    #[display("Draw")]
    Draw,
    /// The game goes on; names the player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Builds the status for a snapshot's evaluation and the player to move.
    ///
    /// A win always belongs to the previous mover, since the game stops the
    /// moment a line completes.
    pub fn from_outcome(outcome: WinResult, to_move: Player) -> Self {
        match outcome {
            WinResult::Win(_) => Status::Winner(to_move.opponent()),
            WinResult::Draw => Status::Draw,
            WinResult::NoWinner => Status::NextPlayer(to_move),
        }
    }
}

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Game start first.
    #[default]
    Chronological,
    /// Latest move first.
    Reversed,
}

impl HistoryOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Chronological => Self::Reversed,
            Self::Reversed => Self::Chronological,
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Move number this entry jumps to.
    pub move_number: usize,
    /// Whether this is the snapshot on display.
    pub is_current: bool,
    /// Text shown for the entry.
    pub label: String,
}

/// `(row, col)` of the cell played, with "no move" reading as `(0, 0)`.
fn coordinates(last_move: Option<Position>) -> (usize, usize) {
    last_move.map_or((0, 0), |pos| (pos.row(), pos.col()))
}

/// Label of a move-list entry the player can jump to.
pub fn jump_label(move_number: usize, last_move: Option<Position>) -> String {
    if move_number == 0 {
        return "Go to game start".to_string();
    }
    let (row, col) = coordinates(last_move);
    format!("Go to move #{move_number} [{row},{col}]")
}

/// Label of the entry for the snapshot on display.
///
/// Coordinates are left out whenever the row is 0, which also hides them
/// for moves played on the top row.
pub fn current_label(move_number: usize, last_move: Option<Position>) -> String {
    let (row, col) = coordinates(last_move);
    if row == 0 {
        format!("You are at move #{move_number}")
    } else {
        format!("You are at move #{move_number} [{row},{col}]")
    }
}
