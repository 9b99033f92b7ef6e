//! Application state and input handling.
//!
//! The [`App`] wraps the engine with the little state only the terminal
//! needs (board cursor, focused pane, selected history row) and turns
//! input events into engine [`Command`]s.

use crate::input::move_cursor;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_timeline::{Command, GameEngine, Position};
use tracing::{debug, info, instrument};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates an application showing a fresh game.
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            should_quit: false,
        }
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Row of the move list under the selection, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(command) = self.command_for_key(key.code) {
            self.execute(command);
        }
    }

    /// Handles a mouse event against a screen of size `area`.
    #[instrument(skip(self, mouse), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let layout = ui::screen_layout(area);
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.execute(Command::Play(pos));
        } else if let Some(row) = layout.history_row_at(mouse.column, mouse.row, self.selected)
            && let Some(entry) = self.engine.move_list().get(row)
        {
            self.focus = Focus::History;
            self.execute(Command::JumpTo(entry.move_number));
        }
    }

    /// Updates local state for `code` and returns the engine command it maps to.
    fn command_for_key(&mut self, code: KeyCode) -> Option<Command> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
                None
            }
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                None
            }
            KeyCode::Char('t') => Some(Command::ToggleOrder),
            KeyCode::Char('r') => Some(Command::Reset),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(),
            KeyCode::Char(c) => {
                Position::from_label_or_number(c.encode_utf8(&mut [0; 4])).map(|pos| {
                    self.cursor = pos;
                    Command::Play(pos)
                })
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.navigate(code);
                None
            }
            _ => None,
        }
    }

    /// Enter/Space on the focused pane.
    fn activate(&self) -> Option<Command> {
        match self.focus {
            Focus::Board => Some(Command::Play(self.cursor)),
            Focus::History => self
                .engine
                .move_list()
                .get(self.selected)
                .map(|entry| Command::JumpTo(entry.move_number)),
        }
    }

    fn navigate(&mut self, code: KeyCode) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, code),
            Focus::History => {
                let last = self.engine.history().len() - 1;
                self.selected = match code {
                    KeyCode::Up => self.selected.saturating_sub(1),
                    KeyCode::Down => (self.selected + 1).min(last),
                    _ => self.selected,
                };
            }
        }
    }

    /// Dispatches a command; rejections are logged and otherwise ignored.
    pub fn execute(&mut self, command: Command) {
        match self.engine.dispatch(command) {
            Ok(()) => debug!(%command, status = %self.engine.status(), "Command applied"),
            Err(e) => debug!(%command, error = %e, "Command ignored"),
        }
        self.select_current();
    }

    /// Puts the history selection on the entry for the current move.
    fn select_current(&mut self) {
        self.selected = self
            .engine
            .move_list()
            .iter()
            .position(|entry| entry.is_current)
            .unwrap_or(0);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use strictly_timeline::{HistoryOrder, Player, Square, Status};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16, area: Rect) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.engine().current_snapshot().board().get(Position::TopLeft),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::TopLeft);
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.engine().current_move(), 1);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.engine().last_move(), Some(Position::TopRight));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.engine().status(), Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = App::new();
        for key in ['5', '1', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.engine().current_move(), 1);
        assert_eq!(app.engine().history().len(), 4);
        assert_eq!(app.selected(), 1);
    }

    #[test]
    fn test_toggle_and_reset_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.engine().order(), HistoryOrder::Reversed);
        assert_eq!(app.selected(), 0);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine(), &GameEngine::new());
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new();
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.engine().current_move(), 0);
    }

    #[test]
    fn test_click_cell_then_history_row() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = ui::screen_layout(area);
        let mut app = App::new();

        let cell = layout.board[8];
        click(&mut app, cell.x + 1, cell.y + 1, area);
        assert_eq!(app.engine().last_move(), Some(Position::BottomRight));

        let history = layout.history_inner();
        click(&mut app, history.x, history.y, area);
        assert_eq!(app.engine().current_move(), 0);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.engine().history().len(), 2);
    }

    #[test]
    fn test_click_history_row_while_reversed() {
        let area = Rect::new(0, 0, 80, 24);
        let history = ui::screen_layout(area).history_inner();
        let mut app = App::new();
        for key in ['5', '1', '9'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Char('t'));

        // Reversed rows read #3, #2, #1, start.
        click(&mut app, history.x, history.y + 1, area);
        assert_eq!(app.engine().current_move(), 2);
        assert_eq!(app.engine().history().len(), 4);
        assert_eq!(app.selected(), 1);

        click(&mut app, history.x, history.y + 3, area);
        assert_eq!(app.engine().current_move(), 0);
    }

    #[test]
    fn test_click_history_row_in_scrolled_list() {
        let area = Rect::new(0, 0, 100, 10);
        let history = ui::screen_layout(area).history_inner();
        let mut app = App::new();
        for key in ['1', '2', '3', '5', '4', '6'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.selected(), 6);

        click(&mut app, history.x, history.y, area);
        assert_eq!(app.engine().current_move(), 1);
    }
}
