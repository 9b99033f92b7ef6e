//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{self, Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_timeline::{HistoryOrder, Player, Position, Square};
use strum::IntoEnumIterator;

use crate::app::{App, Focus};

const GAME_PANE_WIDTH: u16 = 30;
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

const HELP: &str = "arrows move  enter/space play  1-9 play  tab switch pane  t toggle history  r reset  q quit";

/// Where each part of the screen goes.
///
/// Shared by drawing and mouse hit testing so clicks land on what is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Board cells, indexed like [`Position::to_index`].
    pub board: [Rect; 9],
    /// Move list pane, including its border.
    pub history: Rect,
    /// Key help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Board cell under a screen coordinate.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        let point = layout::Position::new(x, y);
        Position::iter().find(|pos| self.board[pos.to_index()].contains(point))
    }

    /// Move-list row under a screen coordinate, in display order.
    ///
    /// `selected` is the highlighted row, which decides how far the list is
    /// scrolled.
    pub fn history_row_at(&self, x: u16, y: u16, selected: usize) -> Option<usize> {
        let inner = self.history_inner();
        inner
            .contains(layout::Position::new(x, y))
            .then(|| usize::from(self.history_scroll(selected) + (y - inner.y)))
    }

    /// Number of move-list rows scrolled off the top so `selected` stays visible.
    pub fn history_scroll(&self, selected: usize) -> u16 {
        let visible = self.history_inner().height;
        u16::try_from(selected)
            .unwrap_or(u16::MAX)
            .saturating_sub(visible.saturating_sub(1))
    }

    /// Move-list area inside its border.
    pub fn history_inner(&self) -> Rect {
        history_block().inner(self.history)
    }
}

/// Splits the screen into its panes.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Game and history
            Constraint::Length(1), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GAME_PANE_WIDTH), Constraint::Min(0)])
        .split(rows[1]);

    let game = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body[0]);

    let grid = center_rect(game[1], CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let board = std::array::from_fn(|idx| {
        let (row, col) = (idx as u16 / 3, idx as u16 % 3);
        Rect::new(
            grid.x + col * CELL_WIDTH,
            grid.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid)
    });

    ScreenLayout {
        title: rows[0],
        status: game[0],
        board,
        history: body[1],
        help: rows[2],
    }
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());
    let engine = app.engine();

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(engine.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    let winning = engine.winning_line();
    let board = engine.current_snapshot().board();
    for pos in Position::iter() {
        let cell = CellView {
            square: board.get(pos),
            pos,
            is_cursor: app.focus() == Focus::Board && pos == app.cursor(),
            is_last: engine.last_move() == Some(pos),
            is_winning: winning.is_some_and(|line| line.contains(&pos)),
        };
        draw_cell(frame, layout.board[pos.to_index()], cell);
    }

    draw_history(frame, &layout, app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

/// Everything needed to paint one board cell.
struct CellView {
    square: Square,
    pos: Position,
    is_cursor: bool,
    is_last: bool,
    is_winning: bool,
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: CellView) {
    let (symbol, base_style) = match cell.square.player() {
        None => (
            (cell.pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell.is_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let border = if cell.is_winning {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if cell.is_last {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn history_block() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

fn draw_history(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let engine = app.engine();
    let focused = app.focus() == Focus::History;

    let title = match engine.order() {
        HistoryOrder::Chronological => " History (chronological) ",
        HistoryOrder::Reversed => " History (reversed) ",
    };
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = engine
        .move_list()
        .into_iter()
        .enumerate()
        .map(|(row, entry)| {
            let mut style = if entry.is_current {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            if focused && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(entry.label, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .scroll((layout.history_scroll(app.selected()), 0))
        .block(history_block().title(title).border_style(border));
    frame.render_widget(paragraph, layout.history);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
