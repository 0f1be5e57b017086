//! Top-level UI composition.

use anyhow::Result;
use game_core::Game;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, theme::Theme, widgets};

/// Everything a frame needs to draw itself.
pub struct RenderContext<'a> {
    pub game: &'a Game,
    /// Highlight the most recently spawned tile.
    pub highlight_spawn: bool,
}

/// Render one frame: status line on top, board below, and a splash overlay
/// once the game is over.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = Theme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Score / moves
                Constraint::Min(0),    // Board
            ])
            .split(frame.area());

        widgets::status::render(frame, chunks[0], ctx.game);
        widgets::board::render(frame, chunks[1], ctx, &theme);

        if ctx.game.status().is_terminal() {
            widgets::splash::render(frame, frame.area(), ctx.game, &theme);
        }
    })?;

    Ok(())
}
