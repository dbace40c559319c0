use std::sync::Arc;
use std::time::Instant;

use futures::StreamExt;
use futures::stream;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{ItemGroup, WorkItem, group_by_id};
use crate::engine::ItemProcessor;
use crate::progress::{ConcurrentProgressStore, ProgressSink};

use super::aggregate::{RunReport, aggregate};
use super::runner::{GroupResult, GroupRunner};

/// Default size of the group worker pool
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Primary API for the batched strategy
///
/// Groups a flat item list by id and runs each group on its own tokio task,
/// aborting a group at its first error. The per-group results are
/// aggregated back into one report.
///
/// Group tasks are drawn through an ordered bounded buffer, so at most
/// `max_workers` groups are in flight at once and the remaining groups queue
/// behind them; results still come back in ascending key order no matter
/// which group finishes first.
///
/// One dispatcher drives one run at a time: overlapping `run` calls on the
/// same instance would interleave progress slots for shared keys.
///
/// # Example
/// ```rust,ignore
/// let report = BatchDispatcher::new(SimulatedProcessor::with_defaults())
///     .with_workers(4)
///     .run(items)
///     .await;
/// ```
pub struct BatchDispatcher<P, S = ConcurrentProgressStore> {
    processor: Arc<P>,
    progress: Arc<S>,
    max_workers: usize,
}

impl<P> BatchDispatcher<P, ConcurrentProgressStore>
where
    P: ItemProcessor + 'static,
{
    /// Create a dispatcher with its own progress store and default pool size
    pub fn new(processor: P) -> Self {
        Self {
            processor: Arc::new(processor),
            progress: Arc::new(ConcurrentProgressStore::new()),
            max_workers: DEFAULT_MAX_WORKERS,
        }
    }
}

impl<P, S> BatchDispatcher<P, S>
where
    P: ItemProcessor + 'static,
    S: ProgressSink + 'static,
{
    /// Set the group worker pool size (clamped to at least 1)
    pub fn with_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.max(1);
        self
    }

    /// Swap in a custom progress sink
    pub fn with_progress<S2: ProgressSink + 'static>(
        self,
        progress: Arc<S2>,
    ) -> BatchDispatcher<P, S2> {
        BatchDispatcher {
            processor: self.processor,
            progress,
            max_workers: self.max_workers,
        }
    }

    /// Group, dispatch, and aggregate one item list
    pub async fn run(&self, items: Vec<WorkItem>) -> RunReport {
        let started = Instant::now();
        let job_id = Uuid::new_v4();
        let total_items = items.len();

        debug!(items = total_items, job_id = %job_id, "processing items in batches");

        let groups = group_by_id(items);
        let results = self.dispatch(groups).await;
        let report = aggregate(job_id, total_items, results, started);

        debug!(
            job_id = %job_id,
            items = report.summary.total_items,
            errors = report.summary.error_count,
            elapsed_ms = report.summary.elapsed.as_millis() as u64,
            "finished batched run"
        );

        report
    }

    /// Run every group to completion and collect results in dispatch order
    ///
    /// One tokio task per group, at most `max_workers` in flight. A group
    /// task that dies does not take the run down: its result degrades to
    /// whatever progress the group recorded before failing, and the other
    /// groups are collected normally.
    pub async fn dispatch(&self, groups: Vec<ItemGroup>) -> Vec<GroupResult> {
        if groups.is_empty() {
            return Vec::new();
        }

        debug!(
            groups = groups.len(),
            workers = self.max_workers,
            "dispatching groups"
        );

        stream::iter(groups.into_iter().map(|group| {
            let key = group.key;
            let runner = GroupRunner::new(Arc::clone(&self.processor), Arc::clone(&self.progress));
            let progress = Arc::clone(&self.progress);

            async move {
                let handle = tokio::spawn(async move { runner.run(group).await });

                match handle.await {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(group = key, error = %err, "group task died, salvaging partial progress");
                        GroupResult {
                            key,
                            items: progress.drain(key),
                            completed: false,
                        }
                    }
                }
            }
        }))
        .buffered(self.max_workers)
        .collect()
        .await
    }
}
