//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::{ChannelType, GuildChannel};

use super::TEST_GUILD_ID;

/// Creates a test Serenity GuildChannel with customizable fields.
///
/// Builds the channel by deserializing JSON with the provided values. Every channel
/// belongs to `TEST_GUILD_ID`; remaining fields are set to reasonable defaults.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Channel type (text, voice, category, ...)
/// - `parent_id` - Optional ID of the parent category
/// - `position` - Position in the guild's channel list
///
/// # Returns
/// - `GuildChannel` - A valid Serenity GuildChannel struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(
    channel_id: u64,
    name: &str,
    kind: ChannelType,
    parent_id: Option<u64>,
    position: u16,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "type": u8::from(kind),
        "name": name,
        "position": position,
        "parent_id": parent_id.map(|id| id.to_string()),
        "permission_overwrites": [],
        "nsfw": false,
        "topic": null,
        "last_message_id": null,
        "rate_limit_per_user": 0,
        "flags": 0,
        "available_tags": [],
        "applied_tags": [],
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
