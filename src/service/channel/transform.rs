//! Name transforms applied to each channel in a bulk rename.

use crate::model::channel::ChannelTarget;

use super::emoji::extract_emoji;

/// Divider joining an emoji prefix to the base channel name.
pub const SEPARATOR: char = '┋';

/// Computes a channel's new name.
///
/// Returns `None` when the channel should be left alone. A returned name always differs
/// from the channel's current name.
pub trait ChannelTransform: Send + Sync {
    fn transform(&self, channel: &ChannelTarget) -> Option<String>;
}

/// Name with every emoji prefix removed, i.e. the text after the last separator.
fn base_name(name: &str) -> &str {
    name.rsplit_once(SEPARATOR).map_or(name, |(_, base)| base)
}

/// Prefixes channels with the first emoji of their parent category.
///
/// Existing prefixes, stacked ones included, are replaced rather than added to, so
/// painting twice is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaintTransform;

impl ChannelTransform for PaintTransform {
    fn transform(&self, channel: &ChannelTarget) -> Option<String> {
        let category_name = channel.category_name.as_deref()?;
        let emoji = extract_emoji(category_name)?;

        let new_name = format!("{emoji}{SEPARATOR}{}", base_name(&channel.name));

        (new_name != channel.name).then_some(new_name)
    }
}

/// Removes emoji prefixes, leaving the text after the last separator.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripTransform;

impl ChannelTransform for StripTransform {
    fn transform(&self, channel: &ChannelTarget) -> Option<String> {
        let (_, base) = channel.name.rsplit_once(SEPARATOR)?;

        // Discord rejects empty channel names
        if base.is_empty() {
            tracing::debug!(
                "Not stripping channel {} ({}): nothing follows the last separator",
                channel.id,
                channel.name
            );
            return None;
        }

        if base == channel.name {
            return None;
        }

        Some(base.to_string())
    }
}
