//! Test factories for creating Serenity API objects.
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;

pub use channel::create_test_channel;

/// Guild ID every factory-built object belongs to.
pub const TEST_GUILD_ID: u64 = 900000000000000000;
