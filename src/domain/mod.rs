pub mod grouping;
pub mod item;

// Re-export commonly used types
pub use grouping::{GroupKey, ItemGroup, group_by_id};
pub use item::{ItemStatus, WorkItem};
