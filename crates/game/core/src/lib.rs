//! Deterministic 2048 game logic shared across frontends.
//!
//! `game-core` defines the canonical rules (board, merge engine, round
//! resolution, tile spawning) and exposes pure APIs that any presentation
//! layer can drive. All state mutation flows through [`engine::GameEngine`],
//! and the crate performs no I/O: given the same seed and the same action
//! sequence, a game replays identically.
pub mod action;
pub mod board;
pub mod engine;
pub mod rng;
pub mod spawn;
pub mod state;

pub use action::Action;
pub use board::{Board, BOARD_SIDE, CELL_COUNT, WIN_EXPONENT};
pub use engine::GameEngine;
pub use rng::{Pcg32, RngSource};
pub use spawn::spawn_random_tile;
pub use state::{Game, GameStatus};
