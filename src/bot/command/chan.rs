//! The `/chan` command group.

use serenity::all::{
    CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption, Permissions,
};

use crate::{
    bot::command::{
        context::CommandContext, renamer::DiscordChannelRenamer, reporter::InteractionReporter,
    },
    error::AppError,
    model::{batch::BatchResult, channel::ChannelTarget},
    service::channel::{BatchProcessor, ChannelTransform, PaintTransform, StripTransform},
};

pub const NAME: &str = "chan";

const PAINT: &str = "paint";
const STRIP: &str = "strip";

/// Builds the `/chan` command definition.
///
/// Only members with Manage Channels see the command by default; server admins can
/// change that in the integration settings.
pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Channel management commands")
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            PAINT,
            "Update channel titles to match category emoji",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            STRIP,
            "Remove emoji prefixes from all channel titles",
        ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanSubcommand {
    /// Add category emoji prefixes.
    Paint,
    /// Remove emoji prefixes.
    Strip,
}

impl ChanSubcommand {
    /// Reads the invoked subcommand from the interaction data.
    pub fn from_command(command: &CommandInteraction) -> Result<Self, AppError> {
        let name = command
            .data
            .options
            .first()
            .map(|option| option.name.as_str())
            .unwrap_or_default();

        Self::from_name(name)
    }

    fn from_name(name: &str) -> Result<Self, AppError> {
        match name {
            PAINT => Ok(Self::Paint),
            STRIP => Ok(Self::Strip),
            other => Err(AppError::UnknownCommand(format!("/{NAME} {other}"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Paint => PAINT,
            Self::Strip => STRIP,
        }
    }

    fn transform(self) -> &'static dyn ChannelTransform {
        match self {
            Self::Paint => &PaintTransform,
            Self::Strip => &StripTransform,
        }
    }
}

/// Runs a bulk rename over every channel in the invoking guild.
///
/// The interaction must already be deferred; all output goes out as followups.
///
/// # Arguments
/// - `context` - Invocation context with the HTTP client and target guild
/// - `subcommand` - Which transform to apply
///
/// # Returns
/// - `Ok(BatchResult)` - The run completed, possibly with per-channel failures
/// - `Err(AppError::DiscordErr)` - The guild's channel list couldn't be fetched
pub async fn run(
    context: &CommandContext<'_>,
    subcommand: ChanSubcommand,
) -> Result<BatchResult, AppError> {
    let guild_channels = context.guild_id.channels(&context.http).await?;
    let channels = ChannelTarget::from_guild_channels(&guild_channels);

    let renamer = DiscordChannelRenamer::new(context.http.clone());
    let reporter = InteractionReporter::new(context);

    let result = BatchProcessor::new(&renamer, &reporter)
        .run(&channels, subcommand.transform())
        .await;

    Ok(result)
}
