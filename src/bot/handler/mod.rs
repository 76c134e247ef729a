use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    /// Guild to register commands to, or `None` for global registration
    pub guild_id: Option<u64>,
}

impl Handler {
    pub fn new(guild_id: Option<u64>) -> Self {
        Self { guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called when a user invokes a slash command
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(ctx, interaction).await;
    }
}
