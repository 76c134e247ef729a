//! Batch run results and the user-facing messages derived from them.

use std::fmt;

use crate::error::rename::RenameError;

/// Outcome of one bulk rename run.
///
/// Lives only for the duration of a command; nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    /// Channels successfully renamed.
    pub updated: usize,
    /// Every channel in the guild, renameable or not.
    pub total: usize,
    /// Failures in the order the channels were processed.
    pub failures: Vec<ChannelFailure>,
}

/// Final summary sent when a run completes.
impl fmt::Display for BatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finished! Updated {} channel(s).", self.updated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    RequestFailed(String),
}

impl From<RenameError> for FailureKind {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::PermissionDenied => FailureKind::PermissionDenied,
            RenameError::RequestFailed(message) => FailureKind::RequestFailed(message),
        }
    }
}

/// A rename that Discord rejected for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelFailure {
    /// Display name of the channel at the time of the attempt.
    pub channel_name: String,
    pub kind: FailureKind,
}

impl fmt::Display for ChannelFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FailureKind::PermissionDenied => write!(
                f,
                "Failed to update {}. Missing permissions.",
                self.channel_name
            ),
            FailureKind::RequestFailed(message) => write!(
                f,
                "Failed to update {}. Error: {}",
                self.channel_name, message
            ),
        }
    }
}

/// Intermediate progress emitted between groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    /// Percentage of guild channels visited, capped at 100.
    pub percent: f64,
    /// Channels renamed so far.
    pub updated: usize,
    pub total: usize,
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Progress: {:.2}% ({}/{} channels processed)",
            self.percent, self.updated, self.total
        )
    }
}
