//! Slash command definitions, registration and execution.

pub mod chan;
pub mod context;
pub mod renamer;
pub mod reporter;

use serenity::all::{Command, GuildId, Http};
use std::sync::Arc;

use crate::error::AppError;

/// Registers the bot's slash commands with Discord.
///
/// Guild registration takes effect immediately and is meant for development servers;
/// global registration can take a while to propagate. Either call overwrites any
/// previously registered commands in that scope.
///
/// # Arguments
/// - `http` - Discord HTTP client
/// - `guild_id` - Guild to register to, or `None` for global registration
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError::DiscordErr)` - Discord rejected the registration
pub async fn register_commands(http: &Arc<Http>, guild_id: Option<u64>) -> Result<usize, AppError> {
    let commands = vec![chan::definition()];

    let registered = match guild_id {
        Some(guild_id) => {
            let registered = GuildId::new(guild_id).set_commands(http, commands).await?;
            tracing::info!(
                "Registered {} commands to guild {}",
                registered.len(),
                guild_id
            );
            registered
        }
        None => {
            let registered = Command::set_global_commands(http, commands).await?;
            tracing::info!("Registered {} commands globally", registered.len());
            registered
        }
    };

    Ok(registered.len())
}
