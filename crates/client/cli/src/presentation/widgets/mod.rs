//! UI widgets: board grid, status line, and end-of-game splash.
pub mod board;
pub mod splash;
pub mod status;
