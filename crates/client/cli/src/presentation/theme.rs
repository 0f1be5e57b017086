//! Color scheme and tile styling for the terminal UI.

use game_core::GameStatus;
use ratatui::style::{Color, Modifier, Style};

/// Styling rules for the board and overlays.
///
/// Tile backgrounds form a gradient: a fixed red channel with green rising
/// and blue falling as the exponent grows, so a freshly spawned "2" reads
/// pink and a "2048" reads orange.
pub struct Theme;

impl Theme {
    /// Background style for a tile with the given exponent.
    ///
    /// `highlighted` marks the most recently spawned tile (bright green),
    /// enabled by runtime configuration.
    pub fn tile_style(&self, exponent: u8, highlighted: bool) -> Style {
        if highlighted {
            return Style::default().bg(Color::Rgb(0x00, 0xFF, 0x00)).fg(Color::Black);
        }
        if exponent == 0 {
            return Style::default().bg(Color::Rgb(0x88, 0x88, 0x88));
        }
        let green = 0x44 + 0x11 * exponent;
        let blue = 0xBB - 0x11 * exponent;
        Style::default()
            .bg(Color::Rgb(0xFF, green, blue))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    }

    /// Displayed text for a tile: its value `2^e`, or nothing when empty.
    pub fn tile_label(&self, exponent: u8) -> String {
        if exponent == 0 {
            String::new()
        } else {
            (1u32 << exponent).to_string()
        }
    }

    /// Style of the win/loss splash overlay.
    pub fn splash_style(&self, status: GameStatus) -> Style {
        match status {
            GameStatus::Won => Style::default()
                .bg(Color::Rgb(0x88, 0xFF, 0x00))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            _ => Style::default()
                .bg(Color::Rgb(0x88, 0x88, 0x88))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_powers_of_two() {
        let theme = Theme;
        assert_eq!(theme.tile_label(0), "");
        assert_eq!(theme.tile_label(1), "2");
        assert_eq!(theme.tile_label(11), "2048");
    }

    #[test]
    fn gradient_stays_in_byte_range_up_to_win_exponent() {
        let theme = Theme;
        for exponent in 0..=11 {
            // Must not overflow the u8 color channels.
            let _ = theme.tile_style(exponent, false);
        }
    }
}
