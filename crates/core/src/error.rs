//! Error type shared by the quiz engine.

use thiserror::Error;

use crate::mode::GameMode;

/// Failures surfaced by the engine and its configuration layer.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A mode id that does not name any known game.
    #[error("unknown game mode '{0}'")]
    UnknownMode(String),
    /// The mode exists but the active configuration does not offer it.
    #[error("game mode '{}' is disabled in the current configuration", .0.id())]
    ModeDisabled(GameMode),
    /// Minute-positions are numbered 1 through 12.
    #[error("minute-position {0} is outside 1..=12")]
    InvalidMinutePosition(u8),
    /// A selector was asked to draw from a pool with no values.
    #[error("cannot draw from an empty {0} pool")]
    EmptyPool(&'static str),
    /// Layered configuration could not be read or deserialised.
    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}
