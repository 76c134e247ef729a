use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// Creates the client and runs it until the gateway connection shuts down.
///
/// # Arguments
/// - `config` - Bot configuration with the token and optional command guild
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if client initialization or the gateway connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(config.guild_id);

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
