use dashmap::DashMap;

use crate::domain::{GroupKey, WorkItem};

/// Collection point for per-group processing progress
///
/// Group tasks record each processed item as they go; the dispatcher drains
/// a group's slot either through the runner on normal completion, or
/// directly when a group task dies, salvaging whatever was finished before
/// the failure. One slot per group, touched only by that group's task until
/// the dispatcher reclaims it.
pub trait ProgressSink: Send + Sync {
    /// Append a processed item to the group's slot
    fn record(&self, key: GroupKey, item: WorkItem);

    /// Take the group's recorded items, leaving the slot empty
    fn drain(&self, key: GroupKey) -> Vec<WorkItem>;

    /// Number of items currently recorded for the group
    fn recorded(&self, key: GroupKey) -> usize;
}

/// DashMap-backed concurrent progress store (thread-safe, per-key slots)
pub struct ConcurrentProgressStore {
    slots: DashMap<GroupKey, Vec<WorkItem>>,
}

impl ConcurrentProgressStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }
}

impl Default for ConcurrentProgressStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConcurrentProgressStore {
    fn record(&self, key: GroupKey, item: WorkItem) {
        self.slots.entry(key).or_default().push(item);
    }

    fn drain(&self, key: GroupKey) -> Vec<WorkItem> {
        self.slots.remove(&key).map(|(_, items)| items).unwrap_or_default()
    }

    fn recorded(&self, key: GroupKey) -> usize {
        self.slots.get(&key).map(|slot| slot.len()).unwrap_or(0)
    }
}

impl<S: ProgressSink> ProgressSink for std::sync::Arc<S> {
    fn record(&self, key: GroupKey, item: WorkItem) {
        (**self).record(key, item)
    }

    fn drain(&self, key: GroupKey) -> Vec<WorkItem> {
        (**self).drain(key)
    }

    fn recorded(&self, key: GroupKey) -> usize {
        (**self).recorded(key)
    }
}
