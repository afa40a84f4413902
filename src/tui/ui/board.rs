//! Tic-tac-toe board rendering.

use crate::games::tictactoe::{Player, Position, Square};
use crate::tui::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

/// Renders the tic-tac-toe board.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], app, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], app, 1);
    render_separator(f, rows[3]);
    render_row(f, rows[4], app, 2);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            render_square(f, cols[col * 2], app, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: Position) {
    let engine = app.engine();
    let (text, mut style) = match engine.board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            app.config().mark(player).to_string(),
            Style::default().fg(mark_color(player)).add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Pad vertically so the mark sits in the middle of the 3-line cell
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
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
