use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::{ItemStatus, WorkItem};
use crate::engine::ItemProcessor;

use super::aggregate::{RunReport, RunSummary};
use super::runner::attempt_item;

/// Process the full item list with one concurrent task per item
///
/// Items are sorted by id, then priority, before fan-out; joining in that
/// same order makes the result sequence deterministic regardless of which
/// task finishes first. A task that dies degrades its item to the error
/// state instead of failing the run.
pub async fn run_parallel<P>(processor: Arc<P>, mut items: Vec<WorkItem>) -> RunReport
where
    P: ItemProcessor + 'static,
{
    let started = Instant::now();
    let job_id = Uuid::new_v4();
    let total_items = items.len();

    items.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.priority.cmp(&b.priority)));

    debug!(items = total_items, job_id = %job_id, "processing items in parallel");

    let handles: Vec<(WorkItem, tokio::task::JoinHandle<WorkItem>)> = items
        .into_iter()
        .map(|item| {
            let processor = Arc::clone(&processor);
            let handle = tokio::spawn(async move { attempt_item(processor.as_ref(), item).await });
            (item, handle)
        })
        .collect();

    let mut processed = Vec::with_capacity(total_items);
    for (item, handle) in handles {
        let done = match handle.await {
            Ok(done) => done,
            Err(err) => {
                warn!(id = item.id, error = %err, "item task died, marking item as error");
                item.with_status(ItemStatus::Error)
            }
        };
        processed.push(done);
    }

    let error_count = processed.iter().filter(|item| item.is_error()).count();
    let summary = RunSummary {
        job_id,
        total_items,
        error_count,
        elapsed: started.elapsed(),
    };

    debug!(
        job_id = %job_id,
        items = total_items,
        errors = error_count,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "finished parallel run"
    );

    RunReport {
        summary,
        items: processed,
    }
}
