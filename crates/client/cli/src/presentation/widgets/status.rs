//! Status widget: score and move counter.

use game_core::Game;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the status line above the board.
pub fn render(frame: &mut Frame, area: Rect, game: &Game) {
    let text = vec![Line::from(vec![
        Span::raw("Score: "),
        Span::styled(
            game.score().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | Moves: "),
        Span::styled(game.moves().to_string(), Style::default().fg(Color::Cyan)),
    ])];

    let paragraph =
        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" 2048 "));

    frame.render_widget(paragraph, area);
}
