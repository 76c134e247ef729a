mod bot;
mod config;
mod error;
mod model;
mod service;

use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    match config.guild_id {
        Some(guild_id) => tracing::info!("Starting bot with commands scoped to guild {}", guild_id),
        None => tracing::info!("Starting bot with global commands"),
    }

    bot::start::start_bot(&config).await
}
