//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use super::draw::is_full;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
///
/// When several lines complete at once the earliest one in this order is
/// reported.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Outcome of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is complete and at least one square is empty.
    NoWinner,
    /// Every square is taken and no line is complete.
    Draw,
    /// A line of three identical marks.
    Win([Position; 3]),
}

impl WinResult {
    /// Returns the completed line, if any.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            WinResult::Win(line) => Some(*line),
            WinResult::NoWinner | WinResult::Draw => None,
        }
    }
}

/// What a square contributes to a line comparison.
///
/// Empty squares are keyed by their own position, so two of them never
/// compare equal and an empty line can never complete.
#[derive(PartialEq, Eq)]
enum LineKey {
    Mark(Player),
    Vacant(Position),
}

fn line_key(board: &Board, pos: Position) -> LineKey {
    match board.get(pos) {
        Square::Occupied(player) => LineKey::Mark(player),
        Square::Empty => LineKey::Vacant(pos),
    }
}

fn is_complete(board: &Board, [a, b, c]: [Position; 3]) -> bool {
    let key = line_key(board, a);
    key == line_key(board, b) && key == line_key(board, c)
}

/// Evaluates a board: first completed line, else draw on a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> WinResult {
    if let Some(line) = WINNING_LINES
        .iter()
        .copied()
        .find(|line| is_complete(board, *line))
    {
        return WinResult::Win(line);
    }

    if is_full(board) {
        WinResult::Draw
    } else {
        WinResult::NoWinner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for (idx, player) in marks {
            board.set(Position::from_index(*idx).unwrap(), Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(evaluate(&Board::new()), WinResult::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(
            evaluate(&board),
            WinResult::Win([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(
            evaluate(&board),
            WinResult::Win([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(evaluate(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_two_marks_and_a_gap_do_not_win() {
        let board = board_from(&[(0, Player::X), (1, Player::X)]);
        assert_eq!(evaluate(&board), WinResult::NoWinner);
    }

    #[test]
    fn test_earliest_line_reported_first() {
        // Not reachable in play: X holds both the top row and the left column.
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(evaluate(&board).line(), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = board_from(&[
            (0, Player::X),
            (1, Player::O),
            (2, Player::X),
            (3, Player::X),
            (4, Player::O),
            (5, Player::O),
            (6, Player::O),
            (7, Player::X),
            (8, Player::X),
        ]);
        assert_eq!(evaluate(&board), WinResult::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let board = board_from(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::O),
            (4, Player::O),
            (5, Player::X),
            (6, Player::X),
            (7, Player::O),
            (8, Player::O),
        ]);
        assert!(matches!(evaluate(&board), WinResult::Win(_)));
    }
}
