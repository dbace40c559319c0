pub mod store;

// Re-export commonly used types
pub use store::{ConcurrentProgressStore, ProgressSink};
