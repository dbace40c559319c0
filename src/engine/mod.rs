pub mod error;
pub mod processor;

// Re-export commonly used types
pub use error::EngineError;
pub use processor::{DEFAULT_FAULT_IDS, DEFAULT_WORK_DELAY, ItemProcessor, SimulatedProcessor};
