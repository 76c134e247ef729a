//! Error types.
//!
//! `AppError` is the top-level error for startup and command dispatch. Per-channel rename
//! failures use `RenameError` instead, since those are reported to the user and never
//! abort a run.

pub mod config;
pub mod rename;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// A guild-scoped command was invoked outside of a guild (e.g. in a DM).
    #[error("This command can only be used in a server")]
    NotInGuild,

    /// Interaction referenced a command or subcommand the bot doesn't provide.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
