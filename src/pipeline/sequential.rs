use std::time::Instant;

use tracing::debug;
use uuid::Uuid;

use crate::domain::WorkItem;
use crate::engine::ItemProcessor;

use super::aggregate::{RunReport, RunSummary};
use super::runner::attempt_item;

/// Process the full item list one item at a time, no concurrency
///
/// Errors do not stop the run; every item is attempted and the summary
/// carries the final error count.
pub async fn run_sequential<P>(processor: &P, items: Vec<WorkItem>) -> RunReport
where
    P: ItemProcessor + ?Sized,
{
    let started = Instant::now();
    let job_id = Uuid::new_v4();
    let total_items = items.len();

    debug!(items = total_items, job_id = %job_id, "processing items sequentially");

    let mut processed = Vec::with_capacity(total_items);
    for item in items {
        processed.push(attempt_item(processor, item).await);
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
        "finished sequential run"
    );

    RunReport {
        summary,
        items: processed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;
    use crate::engine::SimulatedProcessor;
    use crate::source::DummyGenerator;

    #[tokio::test]
    async fn processes_every_item_in_input_order() {
        let processor = SimulatedProcessor::without_delay([]);
        let items = DummyGenerator::new().with_id_count(4).generate();

        let report = run_sequential(&processor, items.clone()).await;

        assert_eq!(report.items.len(), items.len());
        let shape: Vec<(u32, u8)> = report.items.iter().map(|i| (i.id, i.priority)).collect();
        let expected: Vec<(u32, u8)> = items.iter().map(|i| (i.id, i.priority)).collect();
        assert_eq!(shape, expected);
    }

    #[tokio::test]
    async fn errors_do_not_stop_the_run() {
        let processor = SimulatedProcessor::without_delay([3, 13]);
        let items = DummyGenerator::new().generate();

        let report = run_sequential(&processor, items).await;

        // every priority variant of ids 3 and 13 is attempted and errors
        assert_eq!(report.items.len(), 60);
        assert_eq!(report.error_count(), 6);
    }

    #[tokio::test]
    async fn empty_input_yields_empty_report() {
        let processor = SimulatedProcessor::without_delay([]);

        let report = run_sequential(&processor, Vec::new()).await;

        assert!(report.items.is_empty());
        assert_eq!(report.error_count(), 0);
    }

    #[tokio::test]
    async fn all_results_reach_terminal_state() {
        let processor = SimulatedProcessor::without_delay([2]);
        let items = DummyGenerator::new().with_id_count(3).generate();

        let report = run_sequential(&processor, items).await;

        assert!(
            report
                .items
                .iter()
                .all(|i| i.status != ItemStatus::Pending)
        );
    }
}
