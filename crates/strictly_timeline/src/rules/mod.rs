//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules never touch the
//! history or the engine, so they can be evaluated against any snapshot.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinResult, evaluate};
