//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Slash commands are
//! (re)registered here so that their definitions always match the running build.

use serenity::all::{Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registration failures are logged; the bot stays connected so previously registered
/// commands keep working.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild to register commands to, or `None` for global registration
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: Option<u64>) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if let Err(e) = command::register_commands(&ctx.http, guild_id).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }
}
