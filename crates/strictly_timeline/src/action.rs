//! First-class commands for the game engine.
//!
//! Every user interaction is one of four commands. The frontend builds
//! them from input events and hands them to
//! [`GameEngine::dispatch`](super::GameEngine::dispatch).

use super::Position;
use serde::{Deserialize, Serialize};

/// A user intent the engine can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place the current mover's mark at a position.
    Play(Position),
    /// Make an earlier (or later) snapshot the current one.
    JumpTo(usize),
    /// Flip the move list between chronological and reversed order.
    ToggleOrder,
    /// Start over from the empty board.
    Reset,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play(pos) => write!(f, "play {}", pos.label()),
            Command::JumpTo(mv) => write!(f, "jump to move #{mv}"),
            Command::ToggleOrder => f.write_str("toggle history order"),
            Command::Reset => f.write_str("reset"),
        }
    }
}

/// Reason a command was rejected.
///
/// Rejections leave the engine untouched. They are reported for logging and
/// tests and are not meant to reach the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The requested move number is not in the history.
    #[display("Move #{} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// Requested move number.
        requested: usize,
        /// Length of the history at the time of the request.
        len: usize,
    },
}

impl std::error::Error for MoveError {}
