use serde::Serialize;

/// Processing state of a work item
///
/// `Pending` is the only initial state. Processing moves an item to exactly
/// one of the terminal states; there are no retries and no re-entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Ok,
    Error,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of work flowing through the pipeline
///
/// `id` doubles as the group key for the batched strategy and is not unique
/// across a dataset. `priority` is only a secondary sort key in the parallel
/// strategy. Items are plain values; processing returns a new item rather
/// than mutating in place, so two tasks can never race on item state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkItem {
    pub id: u32,
    pub priority: u8,
    pub status: ItemStatus,
}

impl WorkItem {
    /// Create a new unprocessed item
    pub fn new(id: u32, priority: u8) -> Self {
        Self {
            id,
            priority,
            status: ItemStatus::Pending,
        }
    }

    /// Return a copy of this item with the given status
    pub fn with_status(self, status: ItemStatus) -> Self {
        Self { status, ..self }
    }

    /// Whether this item finished in the error state
    pub fn is_error(&self) -> bool {
        self.status == ItemStatus::Error
    }
}
