use serenity::all::{ChannelId, EditChannel, Http};
use serenity::async_trait;
use std::sync::Arc;

use crate::error::rename::RenameError;
use crate::service::channel::ChannelRenamer;

/// Renames channels through Discord's HTTP API.
///
/// Serenity's HTTP client queues requests per rate-limit bucket, so concurrent calls for
/// distinct channels are safe.
pub struct DiscordChannelRenamer {
    http: Arc<Http>,
}

impl DiscordChannelRenamer {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChannelRenamer for DiscordChannelRenamer {
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), RenameError> {
        ChannelId::new(channel_id)
            .edit(&self.http, EditChannel::new().name(name))
            .await?;

        Ok(())
    }
}
