//! Stateless UI rendering for the time-travel board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::App;
use super::input::Focus;
use crate::games::tictactoe::{BoardPanel, Player, Position, Square};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

/// Clickable element under a mouse position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// A board cell.
    Cell(Position),
    /// The sort-order button.
    SortButton,
    /// A move-list row, in display order.
    MoveEntry(usize),
}

/// Screen regions for one frame, shared by rendering and hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    title: Rect,
    status: Rect,
    cells: [Rect; 9],
    sort_button: Rect,
    moves: Rect,
    help: Rect,
    list_offset: usize,
}

impl ScreenLayout {
    /// Splits `area` into the regions of the game screen.
    pub fn new(area: Rect, selected: usize) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(BOARD_HEIGHT + 3), // Game
                Constraint::Length(3), // Help
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(BOARD_WIDTH + 8), Constraint::Min(20)])
            .split(chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(BOARD_HEIGHT)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(columns[1]);

        let board_area = center_rect(left[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let loc = pos.location();
            Rect::new(
                board_area.x + loc.col as u16 * CELL_WIDTH,
                board_area.y + loc.row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board_area)
        });

        let moves = right[1];
        let visible = moves.height.saturating_sub(2).max(1) as usize;
        let list_offset = selected.saturating_sub(visible - 1);

        Self {
            title: chunks[0],
            status: left[0],
            cells,
            sort_button: right[0],
            moves,
            help: chunks[2],
            list_offset,
        }
    }

    /// Finds the clickable element at terminal column `x`, row `y`.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        let point = ratatui::layout::Position::new(x, y);
        if let Some(i) = self.cells.iter().position(|cell| cell.contains(point)) {
            return Position::from_index(i).map(Hit::Cell);
        }
        if self.sort_button.contains(point) {
            return Some(Hit::SortButton);
        }
        let inner = Block::default().borders(Borders::ALL).inner(self.moves);
        if inner.contains(point) {
            return Some(Hit::MoveEntry(self.list_offset + (y - inner.y) as usize));
        }
        None
    }
}

/// Draws the whole screen and returns the layout used.
pub fn draw(frame: &mut Frame, app: &App) -> ScreenLayout {
    let layout = ScreenLayout::new(frame.area(), app.selected());
    let panel = app.session().board_panel();

    let title = Paragraph::new("Tic-Tac-Toe Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = Paragraph::new(panel.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    for (pos, area) in Position::ALL.iter().zip(layout.cells) {
        draw_cell(frame, area, &panel, *pos, cursor == Some(*pos));
    }

    let sort = Paragraph::new(app.session().sort_button_label())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(sort, layout.sort_button);

    draw_moves(frame, &layout, app);

    let help_text = match app.focus() {
        Focus::Board => "Arrows+Enter or 1-9: play | Tab: moves | [ ]: step | S: sort | R: restart | Q: quit",
        Focus::Moves => "Up/Down+Enter: jump | Tab: board | [ ]: step | S: sort | R: restart | Q: quit",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);

    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, panel: &BoardPanel, pos: Position, has_cursor: bool) {
    let (symbol, mut style) = match panel.value(pos) {
        Square::Empty => (
            pos.cell_number().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if panel.is_winning_square(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }

    let border_style = if has_cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, area);
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let focused = app.focus() == Focus::Moves;
    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .enumerate()
        .skip(layout.list_offset)
        .map(|(row, entry)| {
            let mut style = if *entry.is_current() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if focused && row == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let title = if focused { "Moves (focused)" } else { "Moves" };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, layout.moves);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
