use serenity::all::{CommandInteraction, CreateInteractionResponseFollowup, GuildId, Http};
use std::sync::Arc;

/// Everything a command needs to act on the guild it was invoked in.
pub struct CommandContext<'a> {
    /// Discord HTTP client shared with the gateway client.
    pub http: Arc<Http>,
    /// Guild whose channels the command operates on.
    pub guild_id: GuildId,
    /// The interaction being answered.
    pub interaction: &'a CommandInteraction,
}

impl<'a> CommandContext<'a> {
    pub fn new(http: Arc<Http>, guild_id: GuildId, interaction: &'a CommandInteraction) -> Self {
        Self {
            http,
            guild_id,
            interaction,
        }
    }

    /// Acknowledges the interaction with an ephemeral "thinking" state.
    pub async fn defer(&self) -> Result<(), serenity::Error> {
        self.interaction.defer_ephemeral(&self.http).await
    }

    /// Sends an ephemeral followup message to the invoking user.
    ///
    /// Delivery failures are logged and otherwise ignored.
    pub async fn followup(&self, content: &str) {
        let message = CreateInteractionResponseFollowup::new()
            .content(content)
            .ephemeral(true);

        if let Err(e) = self.interaction.create_followup(&self.http, message).await {
            tracing::error!(
                "Failed to send followup for interaction {}: {}",
                self.interaction.id,
                e
            );
        }
    }
}
