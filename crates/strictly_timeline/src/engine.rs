//! Game engine with a branching move history.
//!
//! The engine owns every snapshot reached on the current branch and a
//! pointer to the one on display. Playing from an earlier snapshot drops
//! the snapshots after it before the new one is appended.

use super::action::{Command, MoveError};
use super::contracts::LegalMove;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules::{WinResult, evaluate};
use super::status::{self, HistoryOrder, MoveEntry, Status};
use super::{Player, Position, Snapshot};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine with time travel.
///
/// Deserialized engines are checked against [`TimelineInvariants`], so a
/// stored engine with an empty history or a dangling current move is
/// rejected instead of loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EngineState")]
pub struct GameEngine {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_move: usize,
    pub(crate) order: HistoryOrder,
}

impl GameEngine {
    /// Creates an engine showing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            current_move: 0,
            order: HistoryOrder::default(),
        }
    }

    /// All snapshots on the current branch, starting with the empty board.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Move number of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Order of the move list.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// The snapshot on display.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.history[self.current_move]
    }

    /// Player whose turn it is in the snapshot on display.
    pub fn current_mover(&self) -> Player {
        Player::for_move_count(self.current_move)
    }

    /// Evaluation of the board on display.
    pub fn outcome(&self) -> WinResult {
        evaluate(self.current_snapshot().board())
    }

    /// Status line for the snapshot on display.
    pub fn status(&self) -> Status {
        Status::from_outcome(self.outcome(), self.current_mover())
    }

    /// Completed line on the board on display, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome().line()
    }

    /// Cell played to reach the snapshot on display.
    pub fn last_move(&self) -> Option<Position> {
        self.current_snapshot().last_move()
    }

    /// Places the current mover's mark at `pos`.
    ///
    /// Any snapshots after the current one are discarded first. Rejected
    /// moves leave the engine unchanged.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] if the board on display already has a winner,
    /// [`MoveError::SquareOccupied`] if `pos` is taken.
    #[instrument(skip(self), fields(position = %pos, current_move = self.current_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let snapshot = self.current_snapshot();
        LegalMove::check(pos, snapshot)?;

        let mover = self.current_mover();
        let board = snapshot.board().with_mark(pos, mover);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(Snapshot::after_move(board, pos));
        self.current_move = self.history.len() - 1;

        debug!(
            player = %mover,
            discarded,
            move_number = self.current_move,
            board = %self.current_snapshot().board(),
            "Move applied"
        );
        self.assert_invariants();
        Ok(())
    }

    /// Makes snapshot `move_number` the one on display.
    ///
    /// # Errors
    ///
    /// [`MoveError::MoveOutOfRange`] if the history has no such snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.history.len() {
            return Err(MoveError::MoveOutOfRange {
                requested: move_number,
                len: self.history.len(),
            });
        }

        self.current_move = move_number;
        debug!(move_number, "Jumped");
        self.assert_invariants();
        Ok(())
    }

    /// Flips the move list between chronological and reversed order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "History order toggled");
    }

    /// Returns to the empty board, dropping all history.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    /// Routes a command to the matching operation.
    ///
    /// # Errors
    ///
    /// Propagates the rejection from [`apply_move`](Self::apply_move) or
    /// [`jump_to`](Self::jump_to).
    #[instrument(skip(self, command), fields(command = %command))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::Play(pos) => self.apply_move(pos),
            Command::JumpTo(move_number) => self.jump_to(move_number),
            Command::ToggleOrder => {
                self.toggle_order();
                Ok(())
            }
            Command::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Jump label for `move_number`, or `None` past the end of the history.
    pub fn move_label(&self, move_number: usize) -> Option<String> {
        self.history
            .get(move_number)
            .map(|snapshot| status::jump_label(move_number, snapshot.last_move()))
    }

    /// The move list in display order.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(move_number, snapshot)| {
                let is_current = move_number == self.current_move;
                let label = if is_current {
                    status::current_label(move_number, snapshot.last_move())
                } else {
                    status::jump_label(move_number, snapshot.last_move())
                };
                MoveEntry {
                    move_number,
                    is_current,
                    label,
                }
            });

        match self.order {
            HistoryOrder::Chronological => entries.collect(),
            HistoryOrder::Reversed => entries.rev().collect(),
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            TimelineInvariants::check_all(self).is_ok(),
            "Timeline invariants violated: {:?}",
            TimelineInvariants::check_all(self)
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked engine fields as read from a serializer.
#[derive(Deserialize)]
struct EngineState {
    history: Vec<Snapshot>,
    current_move: usize,
    order: HistoryOrder,
}

impl TryFrom<EngineState> for GameEngine {
    type Error = String;

    fn try_from(state: EngineState) -> Result<Self, Self::Error> {
        let engine = Self {
            history: state.history,
            current_move: state.current_move,
            order: state.order,
        };
        TimelineInvariants::check_all(&engine).map_err(|violations| {
            let reasons: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            format!("Invalid engine state: {}", reasons.join("; "))
        })?;
        Ok(engine)
    }
}
