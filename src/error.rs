//! Error type for the fallible surfaces of the crate.
//!
//! Routine absence (an empty square, an illegal destination, undo with an
//! empty log) is expressed through `Option`/`bool` results, not through
//! this type.

/// Errors raised while parsing input or talking to a display surface.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid configuration value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
}
