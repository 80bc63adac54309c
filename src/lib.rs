//! MEMORA - terminal memory-matching game
//!
//! A TUI concentration game: flip tiles two at a time, find every pair,
//! and keep the try counter low.

use std::fmt;

pub mod app;
pub mod config;
pub mod game;

// Common error types
#[derive(Debug)]
pub enum MemoraError {
    /// Board generation was asked for an odd number of tiles
    OddTileCount(usize),
    /// More pairs requested than the symbol catalog holds
    CatalogExhausted { requested: usize, available: usize },
    /// An explicit board layout does not form complete pairs
    InvalidLayout(String),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// TUI rendering or interaction error
    TuiError(String),
    /// I/O operation failed
    IoError(std::io::Error),
}

impl fmt::Display for MemoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoraError::OddTileCount(count) => {
                write!(f, "The number of tiles must be even (got {})", count)
            }
            MemoraError::CatalogExhausted {
                requested,
                available,
            } => write!(
                f,
                "Requested {} pairs but only {} symbols are available",
                requested, available
            ),
            MemoraError::InvalidLayout(msg) => write!(f, "Invalid board layout: {}", msg),
            MemoraError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            MemoraError::TuiError(msg) => write!(f, "TUI error: {}", msg),
            MemoraError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for MemoraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemoraError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MemoraError {
    fn from(err: std::io::Error) -> Self {
        MemoraError::IoError(err)
    }
}

impl From<toml::de::Error> for MemoraError {
    fn from(err: toml::de::Error) -> Self {
        MemoraError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for MemoraError {
    fn from(err: toml::ser::Error) -> Self {
        MemoraError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for MEMORA operations
pub type Result<T> = std::result::Result<T, MemoraError>;

/// Error handling utilities
pub mod error {
    use super::MemoraError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &MemoraError) -> String {
        match error {
            MemoraError::OddTileCount(count) => format!(
                "A board needs an even number of tiles, {} cannot be split into pairs.",
                count
            ),
            MemoraError::CatalogExhausted { available, .. } => format!(
                "Too many tiles requested. Use at most {} tiles.",
                available * 2
            ),
            MemoraError::ConfigError(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            MemoraError::TuiError(_) => {
                "Could not set up the terminal. Make sure you are running in an interactive terminal."
                    .to_string()
            }
            _ => error.to_string(),
        }
    }

    /// Whether the error came from the caller breaking a board contract
    /// rather than from the environment
    pub fn is_contract_violation(error: &MemoraError) -> bool {
        matches!(
            error,
            MemoraError::OddTileCount(_)
                | MemoraError::CatalogExhausted { .. }
                | MemoraError::InvalidLayout(_)
        )
    }
}

// Common types and constants
pub const APP_NAME: &str = "memora";
pub const CONFIG_FILE: &str = "memora.toml";
pub const LOG_FILE: &str = "memora.log";
