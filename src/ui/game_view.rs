use crate::game::{Color as Team, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(frame: &mut Frame, game: &GameState, message: &Option<String>) {
    let board_height = (2 * game.board().radius() + 1) as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board
            Constraint::Length(3),         // Message
            Constraint::Length(4),         // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let board = game.board();
    let counts: Vec<String> = Team::ALL
        .iter()
        .filter_map(|&team| {
            let n = board.marbles().filter(|(_, m)| m.color() == team).count();
            (n > 0).then(|| format!("{} {}", team.name(), n))
        })
        .collect();

    let status = format!(
        "{}  |  {}  |  Selected: {}",
        counts.join("  "),
        game.cursor(),
        game.selection().len()
    );

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Hex Marbles"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &GameState, area: ratatui::layout::Rect) {
    let board_widget = Paragraph::new(board_lines(game))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("w/e: ↖ ↗  |  a/d: ← →  |  z/x: ↙ ↘  |  Shift: move selection");
    let line2 = Line::from("Space: Select  |  Esc: Clear  |  R: Reset  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
