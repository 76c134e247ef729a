//! Batched bulk rename with per-channel error isolation.
//!
//! Renameable channels are processed in groups of `BATCH_SIZE`. Every rename in a group is
//! in flight at once and the whole group is awaited before the next one starts, which
//! keeps the bot well inside Discord's rate limits on large guilds. A failed rename is
//! reported once and never retried; it does not stop the rest of the run.

use futures::future::join_all;
use serenity::async_trait;

use crate::{
    error::rename::RenameError,
    model::{
        batch::{BatchResult, ChannelFailure, ProgressReport},
        channel::ChannelTarget,
    },
};

use super::transform::ChannelTransform;

/// Maximum number of renames in flight at once.
pub const BATCH_SIZE: usize = 10;

/// Progress is reported whenever the processed count reaches a multiple of this.
pub const PROGRESS_INTERVAL: usize = 50;

/// Renames a channel on the chat platform.
///
/// Must be safe to call concurrently for distinct channels.
#[async_trait]
pub trait ChannelRenamer: Send + Sync {
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), RenameError>;
}

/// Receives user-facing notifications produced during a run.
///
/// Delivery is fire-and-forget from the processor's point of view; implementations log
/// their own delivery problems.
#[async_trait]
pub trait BatchReporter: Send + Sync {
    async fn progress(&self, report: &ProgressReport);

    async fn failure(&self, failure: &ChannelFailure);

    async fn finished(&self, result: &BatchResult);
}

/// Result of handling a single channel.
enum ChannelOutcome {
    Updated,
    Unchanged,
    Failed(ChannelFailure),
}

/// Running totals for a run, folded after each group completes.
#[derive(Default)]
struct BatchAccumulator {
    updated: usize,
    failures: Vec<ChannelFailure>,
}

impl BatchAccumulator {
    fn into_result(self, total: usize) -> BatchResult {
        BatchResult {
            updated: self.updated,
            total,
            failures: self.failures,
        }
    }
}

pub struct BatchProcessor<'a> {
    renamer: &'a dyn ChannelRenamer,
    reporter: &'a dyn BatchReporter,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(renamer: &'a dyn ChannelRenamer, reporter: &'a dyn BatchReporter) -> Self {
        Self { renamer, reporter }
    }

    /// Applies `transform` to every renameable channel and renames the ones that change.
    ///
    /// `channels` should be the guild's full channel list. Only text channels are
    /// touched, but the progress denominator and `BatchResult::total` count every
    /// channel passed in.
    ///
    /// Reporting order per group: the group's failures in channel order, then a progress
    /// report if the group ends on a multiple of `PROGRESS_INTERVAL` or is the last one.
    /// A final summary is always sent, even when there were no renameable channels.
    ///
    /// # Arguments
    /// - `channels` - Every channel in the guild
    /// - `transform` - Computes each channel's new name
    ///
    /// # Returns
    /// - `BatchResult` - Updated count, total channel count and per-channel failures
    pub async fn run(
        &self,
        channels: &[ChannelTarget],
        transform: &dyn ChannelTransform,
    ) -> BatchResult {
        let total = channels.len();
        let renameable: Vec<&ChannelTarget> = channels
            .iter()
            .filter(|channel| channel.kind.is_renameable())
            .collect();

        tracing::debug!(
            "Starting bulk rename over {} text channels ({} channels total)",
            renameable.len(),
            total
        );

        let group_count = renameable.len().div_ceil(BATCH_SIZE);
        let mut accumulator = BatchAccumulator::default();

        for (index, group) in renameable.chunks(BATCH_SIZE).enumerate() {
            let outcomes = join_all(
                group
                    .iter()
                    .map(|channel| self.update_channel(channel, transform)),
            )
            .await;

            for outcome in outcomes {
                match outcome {
                    ChannelOutcome::Updated => accumulator.updated += 1,
                    ChannelOutcome::Unchanged => {}
                    ChannelOutcome::Failed(failure) => {
                        self.reporter.failure(&failure).await;
                        accumulator.failures.push(failure);
                    }
                }
            }

            // Counts whole groups, so the last mark can run past the number of text channels
            let processed = (index + 1) * BATCH_SIZE;
            let is_last = index + 1 == group_count;

            if processed % PROGRESS_INTERVAL == 0 || is_last {
                self.reporter
                    .progress(&ProgressReport {
                        percent: progress_percent(processed, total),
                        updated: accumulator.updated,
                        total,
                    })
                    .await;
            }
        }

        let result = accumulator.into_result(total);

        tracing::info!(
            "Bulk rename finished: {} updated, {} failed, {} channels total",
            result.updated,
            result.failures.len(),
            result.total
        );

        self.reporter.finished(&result).await;

        result
    }

    async fn update_channel(
        &self,
        channel: &ChannelTarget,
        transform: &dyn ChannelTransform,
    ) -> ChannelOutcome {
        let Some(new_name) = transform
            .transform(channel)
            .filter(|new_name| *new_name != channel.name)
        else {
            return ChannelOutcome::Unchanged;
        };

        match self.renamer.rename_channel(channel.id, &new_name).await {
            Ok(()) => {
                tracing::debug!(
                    "Renamed channel {} from {} to {}",
                    channel.id,
                    channel.name,
                    new_name
                );
                ChannelOutcome::Updated
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to rename channel {} ({}): {}",
                    channel.id,
                    channel.name,
                    e
                );
                ChannelOutcome::Failed(ChannelFailure {
                    channel_name: channel.name.clone(),
                    kind: e.into(),
                })
            }
        }
    }
}

/// Share of guild channels visited, capped at 100.
fn progress_percent(processed: usize, total: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }

    (processed as f64 / total as f64 * 100.0).min(100.0)
}
