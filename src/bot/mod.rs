//! Discord bot integration.
//!
//! The bot exposes a single slash command group, `/chan`, with two subcommands:
//! - `paint` - prefix every text channel with its category's emoji
//! - `strip` - remove emoji prefixes from every text channel
//!
//! Both run through the batch processor in `service::channel` and report progress back to
//! the invoking user as ephemeral followup messages.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is needed. Slash command interactions are delivered regardless of intents,
//! and channels are fetched over HTTP when a command runs.
//!
//! The bot account needs the Manage Channels permission in every channel it should rename.

pub mod command;
pub mod handler;
pub mod start;
