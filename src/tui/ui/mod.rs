//! UI rendering using ratatui.

mod board;

use super::app::App;
use super::feedback::Tone;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app);

    let feedback = app.feedback();
    let status = Paragraph::new(feedback.message().as_str())
        .style(tone_style(*feedback.tone()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 or arrows+Enter: Move | R: Restart | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Neutral => Style::default().fg(Color::White),
        Tone::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Warning => Style::default().fg(Color::Yellow),
    }
}
