use std::collections::BTreeMap;

use super::item::WorkItem;

/// Key shared by all items of one group (the item id)
pub type GroupKey = u32;

/// An ordered run of items sharing one group key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGroup {
    pub key: GroupKey,
    pub items: Vec<WorkItem>,
}

impl ItemGroup {
    pub fn new(key: GroupKey, items: Vec<WorkItem>) -> Self {
        Self { key, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Partition a flat item sequence into groups keyed by item id
///
/// Every item lands in exactly one group and keeps its relative order as
/// encountered in the input. Groups are returned in ascending key order;
/// this is the dispatch order, and therefore the order groups appear in the
/// aggregated result.
pub fn group_by_id(items: Vec<WorkItem>) -> Vec<ItemGroup> {
    let mut buckets: BTreeMap<GroupKey, Vec<WorkItem>> = BTreeMap::new();

    for item in items {
        buckets.entry(item.id).or_default().push(item);
    }

    buckets
        .into_iter()
        .map(|(key, items)| ItemGroup::new(key, items))
        .collect()
}
