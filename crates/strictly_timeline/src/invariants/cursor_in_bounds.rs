//! Cursor invariant: the current move always points into the history.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: history is never empty and `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        !engine.history().is_empty() && engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current move points into a non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_engine_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::Center).unwrap();
        engine.current_move = 2;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
