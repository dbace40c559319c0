use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::domain::WorkItem;

use super::runner::GroupResult;

/// Final accounting for one pipeline invocation
///
/// Created when a run starts and only ever read after every task has
/// completed. `total_items` is the size of the input dataset; truncated
/// groups make the result set smaller than this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub job_id: Uuid,
    pub total_items: usize,
    pub error_count: usize,
    pub elapsed: Duration,
}

/// A run's summary together with its flat ordered item results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub items: Vec<WorkItem>,
}

impl RunReport {
    pub fn error_count(&self) -> usize {
        self.summary.error_count
    }
}

/// Flatten per-group results into one report
///
/// Groups are concatenated in the order given, which the dispatcher fixes to
/// ascending key order at dispatch time; completion order never leaks into
/// the output. The computation is pure given the collected inputs.
pub fn aggregate(
    job_id: Uuid,
    total_items: usize,
    results: Vec<GroupResult>,
    started: Instant,
) -> RunReport {
    let mut items = Vec::with_capacity(results.iter().map(|r| r.items.len()).sum());
    for result in results {
        items.extend(result.items);
    }

    let error_count = items.iter().filter(|item| item.is_error()).count();

    RunReport {
        summary: RunSummary {
            job_id,
            total_items,
            error_count,
            elapsed: started.elapsed(),
        },
        items,
    }
}
