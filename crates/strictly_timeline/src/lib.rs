//! Strictly Timeline - tic-tac-toe with a branching move history
//!
//! The engine keeps one snapshot per move. Any snapshot can be put back on
//! display, and playing from it discards the moves that followed.
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{Command, GameEngine, Position, Status, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.dispatch(Command::Play(Position::Center)).unwrap();
//! engine.dispatch(Command::Play(Position::TopLeft)).unwrap();
//! engine.dispatch(Command::JumpTo(1)).unwrap();
//! engine.dispatch(Command::Play(Position::BottomRight)).unwrap();
//!
//! assert_eq!(engine.history().len(), 3);
//! assert_eq!(engine.status(), Status::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod status;
mod types;

pub use action::{Command, MoveError};
pub use engine::GameEngine;
pub use position::Position;
pub use rules::{WinResult, evaluate};
pub use snapshot::Snapshot;
pub use status::{HistoryOrder, MoveEntry, Status};
pub use types::{Board, Player, Square};
