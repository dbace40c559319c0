use crate::domain::WorkItem;

/// Deterministic dummy item source
///
/// Emits `id_count * priority_levels` pending items in id-major order:
/// for each id `1..=id_count`, one item per priority level `1..=levels`.
/// The same configuration always yields the same sequence.
#[derive(Debug, Clone)]
pub struct DummyGenerator {
    id_count: u32,
    priority_levels: u8,
}

impl DummyGenerator {
    /// Stock dataset shape: 20 ids, 3 priority levels, 60 items
    pub fn new() -> Self {
        Self {
            id_count: 20,
            priority_levels: 3,
        }
    }

    pub fn with_id_count(mut self, id_count: u32) -> Self {
        self.id_count = id_count;
        self
    }

    pub fn with_priority_levels(mut self, levels: u8) -> Self {
        self.priority_levels = levels.max(1);
        self
    }

    /// Produce the full ordered item sequence
    pub fn generate(&self) -> Vec<WorkItem> {
        let mut items =
            Vec::with_capacity(self.id_count as usize * self.priority_levels as usize);

        for id in 1..=self.id_count {
            for priority in 1..=self.priority_levels {
                items.push(WorkItem::new(id, priority));
            }
        }

        items
    }
}

impl Default for DummyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;

    #[test]
    fn stock_dataset_has_sixty_items() {
        let items = DummyGenerator::new().generate();

        assert_eq!(items.len(), 60);
        assert!(items.iter().all(|i| i.status == ItemStatus::Pending));
        assert!(items.iter().all(|i| (1..=20).contains(&i.id)));
        assert!(items.iter().all(|i| (1..=3).contains(&i.priority)));
    }

    #[test]
    fn items_are_id_major_ordered() {
        let items = DummyGenerator::new()
            .with_id_count(2)
            .with_priority_levels(3)
            .generate();

        let shape: Vec<(u32, u8)> = items.iter().map(|i| (i.id, i.priority)).collect();
        assert_eq!(
            shape,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn generation_is_deterministic() {
        let generator = DummyGenerator::new();
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn zero_ids_produce_empty_dataset() {
        let items = DummyGenerator::new().with_id_count(0).generate();
        assert!(items.is_empty());
    }
}
