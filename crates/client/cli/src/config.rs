//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// Terminal client configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Fixed RNG seed for deterministic replay. `None` means fresh entropy.
    pub seed: Option<u64>,

    /// Frame interval in milliseconds (input poll timeout per iteration).
    pub frame_interval_ms: u64,

    /// Highlight the most recently spawned tile.
    pub highlight_spawn: bool,

    /// Directory receiving per-session log files.
    pub log_dir: PathBuf,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TWENTY48_SEED` - fixed RNG seed (default: random)
    /// - `TWENTY48_FRAME_MS` - frame interval in milliseconds (default: 16)
    /// - `TWENTY48_HIGHLIGHT_SPAWN` - highlight the last spawned tile
    ///   (default: false)
    /// - `TWENTY48_LOG_DIR` - log directory (default: `logs`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("TWENTY48_SEED") {
            config.seed = Some(seed);
        }
        if let Some(frame_ms) = read_env::<u64>("TWENTY48_FRAME_MS") {
            config.frame_interval_ms = frame_ms.max(1);
        }
        if let Some(highlight) = read_env::<bool>("TWENTY48_HIGHLIGHT_SPAWN") {
            config.highlight_spawn = highlight;
        }
        if let Some(dir) = read_env::<PathBuf>("TWENTY48_LOG_DIR") {
            config.log_dir = dir;
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_interval_ms: 16,
            highlight_spawn: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
