//! Interaction event handler.
//!
//! Routes `/chan` slash commands to the command layer. Anything that goes wrong is
//! reported back to the invoking user ephemerally and logged; errors never propagate
//! out of the event handler.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    Interaction,
};

use crate::bot::command::{
    chan::{self, ChanSubcommand},
    context::CommandContext,
};
use crate::error::AppError;

/// Handles the interaction_create event.
///
/// Non-command interactions and commands other than `/chan` are ignored. The response
/// is deferred before any channel work starts, since a bulk rename can take far longer
/// than Discord's initial response window.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if command.data.name != chan::NAME {
        tracing::debug!("Ignoring unknown command /{}", command.data.name);
        return;
    }

    let subcommand = match ChanSubcommand::from_command(&command) {
        Ok(subcommand) => subcommand,
        Err(e) => {
            respond_with_error(&ctx, &command, &e).await;
            return;
        }
    };

    let Some(guild_id) = command.guild_id else {
        respond_with_error(&ctx, &command, &AppError::NotInGuild).await;
        return;
    };

    tracing::info!(
        "User {} invoked /{} {} in guild {}",
        command.user.id,
        chan::NAME,
        subcommand.name(),
        guild_id
    );

    let context = CommandContext::new(ctx.http.clone(), guild_id, &command);

    if let Err(e) = context.defer().await {
        tracing::error!("Failed to defer /{} response: {}", chan::NAME, e);
        return;
    }

    if let Err(e) = chan::run(&context, subcommand).await {
        tracing::error!(
            "/{} {} failed in guild {}: {}",
            chan::NAME,
            subcommand.name(),
            guild_id,
            e
        );
        context.followup(&e.to_string()).await;
    }
}

/// Sends an immediate ephemeral response describing `error`.
async fn respond_with_error(ctx: &Context, command: &CommandInteraction, error: &AppError) {
    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(error.to_string())
            .ephemeral(true),
    );

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}
