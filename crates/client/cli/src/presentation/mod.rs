//! Terminal presentation layer: setup, theme, and rendering.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
