//! Board widget: the 4×4 tile grid.

use game_core::{BOARD_SIDE, Board};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Paragraph},
};

use crate::presentation::{theme::Theme, ui::RenderContext};

/// Render the tile grid centred in `area`.
///
/// Each cell is a solid block in the tile's gradient color with the value
/// `2^e` centred inside it; empty cells are plain grey. When spawn
/// highlighting is enabled, the most recently inserted tile is drawn green.
pub fn render(frame: &mut Frame, area: Rect, ctx: &RenderContext, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, BOARD_SIDE as u32); BOARD_SIDE])
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, BOARD_SIDE as u32); BOARD_SIDE])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            render_tile(frame, *cell_area, ctx, theme, row, col);
        }
    }
}

fn render_tile(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    theme: &Theme,
    row: usize,
    col: usize,
) {
    let exponent = ctx.game.board().get(row, col);
    let highlighted =
        ctx.highlight_spawn && ctx.game.last_inserted() == Some(Board::index_of(row, col));

    let style = theme.tile_style(exponent, highlighted);

    // Pad the label down to the vertical middle of the cell.
    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![String::new(); top_padding as usize];
    lines.push(theme.tile_label(exponent));

    let tile = Paragraph::new(lines.join("\n"))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default());

    frame.render_widget(tile, inset(area));
}

/// Shrinks a cell by one column on each side so tiles read as separate
/// blocks rather than one solid field.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1).max(1),
    }
}
