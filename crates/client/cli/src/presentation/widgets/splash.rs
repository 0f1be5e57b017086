//! End-of-game splash overlay.

use game_core::{Game, GameStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Clear, Paragraph},
};

use crate::presentation::theme::Theme;

/// Render the win/loss banner over the board with the final tally.
pub fn render(frame: &mut Frame, area: Rect, game: &Game, theme: &Theme) {
    let banner = match game.status() {
        GameStatus::Won => "YOU HAVE WON",
        GameStatus::Lost => "YOU HAVE LOST",
        GameStatus::Playing => return,
    };

    let overlay = centered(area, 60, 40);
    let text = format!(
        "{banner}\n\nScore: {}\nMoves: {}\n\npress q to quit",
        game.score(),
        game.moves()
    );

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(theme.splash_style(game.status()));

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

/// Centers a rectangle of the given percentage size within `area`.
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
