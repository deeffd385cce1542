//! Error types for startup: configuration loading and terminal checks.

use std::path::PathBuf;

/// Everything that can stop the game from starting.
///
/// Gameplay itself never fails; losing a life is a state transition.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Terminal or filesystem I/O
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file named by `INVADERS_CONFIG` could not be read
    #[error("cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for `GameConfig`
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// The config parsed but describes an unplayable game
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

/// Result type for startup operations
pub type Result<T> = std::result::Result<T, GameError>;
