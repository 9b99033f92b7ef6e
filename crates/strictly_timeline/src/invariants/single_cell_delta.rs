//! Delta invariant: consecutive snapshots differ by one new mark.

use super::super::{GameEngine, Snapshot, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: each snapshot after the first fills exactly one square that
/// was empty in its predecessor, and that square is its `last_move`.
///
/// The first snapshot is the empty board with no last move.
pub struct SingleCellDeltaInvariant;

fn single_step(before: &Snapshot, after: &Snapshot) -> bool {
    let Some(played) = after.last_move() else {
        return false;
    };

    crate::Position::iter().all(|pos| {
        let (was, now) = (before.board().get(pos), after.board().get(pos));
        if pos == played {
            was == Square::Empty && now != Square::Empty
        } else {
            was == now
        }
    })
}

impl Invariant<GameEngine> for SingleCellDeltaInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let Some(first) = history.first() else {
            return false;
        };

        *first == Snapshot::initial()
            && history
                .windows(2)
                .all(|pair| single_step(&pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its last move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for pos in [Position::Center, Position::TopLeft, Position::BottomRight] {
            engine.apply_move(pos).unwrap();
        }
        assert!(SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let mut engine = GameEngine::new();
        let board = Board::new()
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        engine.history.push(Snapshot::after_move(board, Position::Center));
        assert!(!SingleCellDeltaInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_last_move_violates() {
        let mut engine = GameEngine::new();
        let board = Board::new().with_mark(Position::Center, Player::X);
        engine.history.push(Snapshot::after_move(board, Position::TopLeft));
        assert!(!SingleCellDeltaInvariant::holds(&engine));
    }
}
