use serenity::async_trait;

use crate::bot::command::context::CommandContext;
use crate::model::batch::{BatchResult, ChannelFailure, ProgressReport};
use crate::service::channel::BatchReporter;

/// Reports batch progress to the invoking user as ephemeral followups.
pub struct InteractionReporter<'a> {
    context: &'a CommandContext<'a>,
}

impl<'a> InteractionReporter<'a> {
    pub fn new(context: &'a CommandContext<'a>) -> Self {
        Self { context }
    }
}

#[async_trait]
impl BatchReporter for InteractionReporter<'_> {
    async fn progress(&self, report: &ProgressReport) {
        self.context.followup(&report.to_string()).await;
    }

    async fn failure(&self, failure: &ChannelFailure) {
        self.context.followup(&failure.to_string()).await;
    }

    async fn finished(&self, result: &BatchResult) {
        self.context.followup(&result.to_string()).await;
    }
}
