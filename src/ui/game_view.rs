use crate::game::{GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Render the difficulty selection screen.
pub fn render_difficulty_menu(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from("Choose Difficulty Level:").style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from("1. Easy"),
        Line::from("2. Medium"),
        Line::from("3. Hard"),
        Line::from(""),
        Line::from("Q: Quit").style(Style::default().fg(Color::DarkGray)),
    ];
    render_menu(frame, lines);
}

/// Render the opponent strategy selection screen.
pub fn render_strategy_menu(frame: &mut Frame) {
    let lines = vec![
        Line::from(""),
        Line::from("Choose AI Algorithm:").style(Style::default().fg(Color::Gray)),
        Line::from(""),
        Line::from("1. Minimax"),
        Line::from("2. Alpha-Beta"),
        Line::from("3. Greedy"),
        Line::from(""),
        Line::from("Q: Quit").style(Style::default().fg(Color::DarkGray)),
    ];
    render_menu(frame, lines);
}

fn render_menu(frame: &mut Frame, lines: Vec<Line>) {
    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );
    frame.render_widget(menu, frame.area());
}

/// Render the game screen: header, board, message bar, and controls.
pub fn render_game(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    mode_label: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, mode_label, chunks[0]);
    board_widget::render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, mode_label: &str, area: Rect) {
    let current_player = game_state.current_player();
    let color = match current_player {
        Player::Human => Color::Red,
        Player::Ai => Color::Magenta,
    };

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", mode_label)
    } else {
        format!("Turn: {}  |  {}", current_player.name(), mode_label)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter: Drop  |  R: New Game  |  Q: Quit");
    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
