//! Synchronous event loop: poll input, resolve one round, render.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use game_core::{Game, GameEngine, GameStatus};

use crate::config::CliConfig;
use crate::input::{self, InputCommand};
use crate::presentation::terminal::Tui;
use crate::presentation::ui::{self, RenderContext};

/// Terminal application owning the one [`Game`] instance.
///
/// Each loop iteration applies at most one directional action: all events
/// available this frame are drained and later presses overwrite earlier
/// unconsumed ones (last-writer-wins per frame), matching a player mashing
/// keys faster than the frame rate.
pub struct App {
    game: Game,
    config: CliConfig,
}

impl App {
    pub fn new(game: Game, config: CliConfig) -> Self {
        Self { game, config }
    }

    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let frame_interval = Duration::from_millis(self.config.frame_interval_ms);

        loop {
            if !self.poll_input(frame_interval)? {
                tracing::info!(score = self.game.score(), moves = self.game.moves(), "quit");
                return Ok(());
            }

            let status_before = self.game.status();
            GameEngine::new(&mut self.game).advance();
            self.log_transition(status_before);

            self.render(terminal)?;
        }
    }

    /// Blocks up to one frame interval for input, then drains the whole
    /// batch. Returns `false` when the player quit.
    fn poll_input(&mut self, frame_interval: Duration) -> Result<bool> {
        let mut timeout = frame_interval;
        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match input::map_key(key) {
                    Some(InputCommand::Quit) => return Ok(false),
                    Some(InputCommand::Move(action)) => {
                        tracing::debug!(?action, "input");
                        self.game.set_pending(action);
                    }
                    None => {}
                },
                // Resize is handled implicitly: we redraw every frame.
                _ => {}
            }
            // Remaining events in this batch are consumed without waiting.
            timeout = Duration::ZERO;
        }
        Ok(true)
    }

    fn log_transition(&self, before: GameStatus) {
        let after = self.game.status();
        if before != after {
            tracing::info!(
                status = %after,
                score = self.game.score(),
                moves = self.game.moves(),
                "game over"
            );
        }
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = RenderContext {
            game: &self.game,
            highlight_spawn: self.config.highlight_spawn,
        };
        ui::render(terminal, &ctx)
    }
}
