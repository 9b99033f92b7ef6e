//! Parity invariant: X plays odd move numbers, O plays even ones.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: snapshot `i` holds exactly `i` marks, and the mark written at
/// move `i > 0` is X when `i` is odd and O when `i` is even.
pub struct MarkParityInvariant;

impl Invariant<GameEngine> for MarkParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .iter()
            .enumerate()
            .all(|(move_number, snapshot)| {
                if snapshot.board().occupied_count() != move_number {
                    return false;
                }
                match snapshot.last_move() {
                    None => move_number == 0,
                    Some(_) if move_number == 0 => false,
                    Some(pos) => {
                        let mover = Player::for_move_count(move_number - 1);
                        snapshot.board().get(pos) == Square::Occupied(mover)
                    }
                }
            })
    }

    fn description() -> &'static str {
        "Snapshot i has i marks and move i was played by the right player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let mut engine = GameEngine::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopCenter] {
            engine.apply_move(pos).unwrap();
        }
        assert!(MarkParityInvariant::holds(&engine));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut engine = GameEngine::new();
        let board = Board::new().with_mark(Position::Center, Player::O);
        engine.history.push(Snapshot::after_move(board, Position::Center));
        assert!(!MarkParityInvariant::holds(&engine));
    }
}
