//! Channel domain model.
//!
//! A `ChannelTarget` is a snapshot of one guild channel taken when a command starts. It is
//! a handle into state owned by Discord; renaming it goes through a `ChannelRenamer`.

use serenity::all::{ChannelId, ChannelType, GuildChannel};
use std::collections::HashMap;

/// Coarse channel kind, reduced to what the rename logic cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Announcement,
    Voice,
    Category,
    Forum,
    Other,
}

impl ChannelKind {
    /// Whether bulk renames apply to this kind of channel.
    ///
    /// Announcement channels are text channels on Discord, so they are painted too.
    pub fn is_renameable(self) -> bool {
        matches!(self, ChannelKind::Text | ChannelKind::Announcement)
    }
}

impl From<ChannelType> for ChannelKind {
    fn from(kind: ChannelType) -> Self {
        match kind {
            ChannelType::Text => ChannelKind::Text,
            ChannelType::News => ChannelKind::Announcement,
            ChannelType::Voice | ChannelType::Stage => ChannelKind::Voice,
            ChannelType::Category => ChannelKind::Category,
            ChannelType::Forum => ChannelKind::Forum,
            _ => ChannelKind::Other,
        }
    }
}

/// Single guild channel considered by a bulk rename.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTarget {
    /// Discord channel ID as a u64.
    pub id: u64,
    /// Current display name.
    pub name: String,
    pub kind: ChannelKind,
    /// Position in the guild's channel list, used for ordering.
    pub position: u16,
    /// Name of the parent category, if the channel has one.
    pub category_name: Option<String>,
}

impl ChannelTarget {
    /// Creates a channel target from its parts.
    #[cfg(test)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        kind: ChannelKind,
        category_name: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position: 0,
            category_name,
        }
    }

    /// Converts a guild's channel map into ordered channel targets.
    ///
    /// Parent categories are looked up in the same map; a `parent_id` that doesn't resolve
    /// to a category channel is treated as no category. The result contains every channel
    /// (categories and voice channels included) ordered by `(position, id)`.
    ///
    /// # Arguments
    /// - `channels` - All channels in the guild as returned by Discord
    ///
    /// # Returns
    /// - `Vec<ChannelTarget>` - One target per channel in display order
    pub fn from_guild_channels(channels: &HashMap<ChannelId, GuildChannel>) -> Vec<Self> {
        let mut targets: Vec<Self> = channels
            .values()
            .map(|channel| {
                let category_name = channel
                    .parent_id
                    .and_then(|parent_id| channels.get(&parent_id))
                    .filter(|parent| parent.kind == ChannelType::Category)
                    .map(|parent| parent.name.clone());

                Self {
                    id: channel.id.get(),
                    name: channel.name.clone(),
                    kind: channel.kind.into(),
                    position: channel.position,
                    category_name,
                }
            })
            .collect();

        targets.sort_by_key(|target| (target.position, target.id));
        targets
    }
}
