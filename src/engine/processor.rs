use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::error::EngineError;
use crate::domain::{ItemStatus, WorkItem};

/// Default fault-id set injected into the simulated processor
pub const DEFAULT_FAULT_IDS: [u32; 4] = [3, 13, 23, 33];

/// Default per-item work delay
pub const DEFAULT_WORK_DELAY: Duration = Duration::from_millis(100);

/// Seam for per-item processing
///
/// Implementations take an item by value and return a new item in a terminal
/// state. An `Err` signals an infrastructural fault (worker interrupted,
/// backend gone), which callers convert to an error-status item rather than
/// propagating.
#[async_trait]
pub trait ItemProcessor: Send + Sync {
    async fn process(&self, item: WorkItem) -> Result<WorkItem, EngineError>;
}

/// Simulated item processor: fixed work delay plus fault injection
///
/// Items whose id falls in the configured fault set come back with
/// `ItemStatus::Error`; everything else succeeds after the delay.
pub struct SimulatedProcessor {
    fault_ids: HashSet<u32>,
    work_delay: Duration,
}

impl SimulatedProcessor {
    /// Create a processor with an injected fault set and work delay
    pub fn new(fault_ids: impl IntoIterator<Item = u32>, work_delay: Duration) -> Self {
        Self {
            fault_ids: fault_ids.into_iter().collect(),
            work_delay,
        }
    }

    /// Processor with the stock fault set and delay
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_FAULT_IDS, DEFAULT_WORK_DELAY)
    }

    /// Fault injection without any simulated latency (test-friendly)
    pub fn without_delay(fault_ids: impl IntoIterator<Item = u32>) -> Self {
        Self::new(fault_ids, Duration::ZERO)
    }
}

impl Default for SimulatedProcessor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[async_trait]
impl ItemProcessor for SimulatedProcessor {
    async fn process(&self, item: WorkItem) -> Result<WorkItem, EngineError> {
        let status = if self.fault_ids.contains(&item.id) {
            ItemStatus::Error
        } else {
            ItemStatus::Ok
        };

        if !self.work_delay.is_zero() {
            tokio::time::sleep(self.work_delay).await;
        }

        debug!(
            id = item.id,
            priority = item.priority,
            status = %status,
            "item processed"
        );

        Ok(item.with_status(status))
    }
}
