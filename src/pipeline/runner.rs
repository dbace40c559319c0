use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, warn};

use crate::domain::{GroupKey, ItemGroup, ItemStatus, WorkItem};
use crate::engine::ItemProcessor;
use crate::progress::ProgressSink;

/// Outcome of processing one group
///
/// `items` may be a strict prefix of the input group: processing stops at
/// the first error-status item, which is still included. `completed` is
/// false when the group was truncated or its task died mid-flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResult {
    pub key: GroupKey,
    pub items: Vec<WorkItem>,
    pub completed: bool,
}

impl GroupResult {
    /// Number of items in this group that finished in the error state
    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_error()).count()
    }
}

/// Process one item, absorbing processor faults
///
/// An `Err` from the processor, or a panic inside it, degrades to an
/// error-status item instead of escaping. The run always completes; faults
/// surface only as elevated error counts and log entries.
pub async fn attempt_item<P>(processor: &P, item: WorkItem) -> WorkItem
where
    P: ItemProcessor + ?Sized,
{
    match AssertUnwindSafe(processor.process(item)).catch_unwind().await {
        Ok(Ok(done)) => done,
        Ok(Err(err)) => {
            warn!(id = item.id, error = %err, "processing failed, marking item as error");
            item.with_status(ItemStatus::Error)
        }
        Err(_) => {
            warn!(id = item.id, "processing panicked, marking item as error");
            item.with_status(ItemStatus::Error)
        }
    }
}

/// Sequential runner for one group's items
///
/// Items are processed strictly in order. The first error aborts the rest
/// of the group; everything attempted so far (failing item included) is the
/// group's result. Each processed item is recorded into the progress sink
/// before the error check, so a dying task leaves its partial progress
/// behind for the dispatcher to salvage.
pub struct GroupRunner<P, S> {
    processor: Arc<P>,
    progress: Arc<S>,
}

impl<P, S> GroupRunner<P, S>
where
    P: ItemProcessor,
    S: ProgressSink,
{
    pub fn new(processor: Arc<P>, progress: Arc<S>) -> Self {
        Self {
            processor,
            progress,
        }
    }

    /// Process the group, returning its (possibly truncated) result
    pub async fn run(&self, group: ItemGroup) -> GroupResult {
        debug!(group = group.key, size = group.len(), "processing group");

        let key = group.key;
        let mut aborted = false;

        for item in group.items {
            let done = attempt_item(self.processor.as_ref(), item).await;
            let failed = done.is_error();
            self.progress.record(key, done);

            if failed {
                debug!(group = key, "error in group, aborting remaining items");
                aborted = true;
                break;
            }
        }

        GroupResult {
            key,
            items: self.progress.drain(key),
            completed: !aborted,
        }
    }
}
