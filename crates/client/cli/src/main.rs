//! Terminal client entry point.
//!
//! Composition root: loads configuration from the environment, sets up
//! file-only logging (stderr would corrupt the TUI), seeds a game, and hands
//! control to the synchronous event loop in [`app`].
mod app;
mod config;
mod input;
mod presentation;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use config::CliConfig;
use game_core::Game;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    setup_logging(&config)?;

    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(seed, "starting game");

    let game = Game::new(seed);

    let mut terminal = presentation::terminal::init()?;
    let result = App::new(game, config).run(&mut terminal);
    presentation::terminal::restore()?;

    tracing::info!("client shutdown complete");
    result
}

/// Setup logging to a session log file under the configured log directory.
fn setup_logging(config: &CliConfig) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    let session_log_dir = config.log_dir.join(format!("session_{timestamp}"));
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer().with_writer(non_blocking_file);

    // File layer only: the terminal belongs to the TUI.
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive for the process lifetime.
    std::mem::forget(guard);

    tracing::info!("log file: {}/client.log", session_log_dir.display());
    Ok(())
}
