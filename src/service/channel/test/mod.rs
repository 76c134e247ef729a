use crate::{
    error::rename::RenameError,
    model::{
        batch::{BatchResult, ChannelFailure, FailureKind, ProgressReport},
        channel::{ChannelKind, ChannelTarget},
    },
    service::channel::{
        BatchProcessor, BatchReporter, ChannelRenamer, ChannelTransform, PaintTransform,
        StripTransform,
    },
};
use serenity::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

mod transform;

/// Renamer that records calls and fails for configured channel IDs.
///
/// Each call yields once before completing so that every rename in a group is
/// in flight at the same time, which lets tests observe the concurrency bound.
#[derive(Default)]
struct FakeRenamer {
    renamed: Mutex<Vec<(u64, String)>>,
    failures: HashMap<u64, RenameError>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeRenamer {
    fn failing(failures: impl IntoIterator<Item = (u64, RenameError)>) -> Self {
        Self {
            failures: failures.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Successful renames ordered by channel ID.
    fn renamed(&self) -> Vec<(u64, String)> {
        let mut renamed = self.renamed.lock().unwrap().clone();
        renamed.sort();
        renamed
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChannelRenamer for FakeRenamer {
    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), RenameError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some(err) = self.failures.get(&channel_id) {
            return Err(err.clone());
        }

        self.renamed
            .lock()
            .unwrap()
            .push((channel_id, name.to_string()));
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Reported {
    Progress(ProgressReport),
    Failure(ChannelFailure),
    Finished(BatchResult),
}

#[derive(Default)]
struct RecordingReporter {
    reported: Mutex<Vec<Reported>>,
}

impl RecordingReporter {
    fn reported(&self) -> Vec<Reported> {
        self.reported.lock().unwrap().clone()
    }

    fn progress(&self) -> Vec<ProgressReport> {
        self.reported()
            .into_iter()
            .filter_map(|r| match r {
                Reported::Progress(p) => Some(p),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl BatchReporter for RecordingReporter {
    async fn progress(&self, report: &ProgressReport) {
        self.reported
            .lock()
            .unwrap()
            .push(Reported::Progress(report.clone()));
    }

    async fn failure(&self, failure: &ChannelFailure) {
        self.reported
            .lock()
            .unwrap()
            .push(Reported::Failure(failure.clone()));
    }

    async fn finished(&self, result: &BatchResult) {
        self.reported
            .lock()
            .unwrap()
            .push(Reported::Finished(result.clone()));
    }
}

fn text_channel(id: u64, name: &str, category_name: Option<&str>) -> ChannelTarget {
    ChannelTarget::new(
        id,
        name,
        ChannelKind::Text,
        category_name.map(str::to_string),
    )
}

/// `count` text channels named `channel-{id}` in the 🎨 Art category, IDs from 1.
fn painted_guild(count: u64) -> Vec<ChannelTarget> {
    (1..=count)
        .map(|id| text_channel(id, &format!("channel-{id}"), Some("🎨 Art")))
        .collect()
}
