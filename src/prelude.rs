//! Prelude module for convenient imports
//!
//! Import everything you need with: `use batcher::prelude::*;`

// Domain types
pub use crate::domain::{GroupKey, ItemGroup, ItemStatus, WorkItem, group_by_id};

// Source types
pub use crate::source::DummyGenerator;

// Engine types
pub use crate::engine::{
    DEFAULT_FAULT_IDS, DEFAULT_WORK_DELAY, EngineError, ItemProcessor, SimulatedProcessor,
};

// Progress types
pub use crate::progress::{ConcurrentProgressStore, ProgressSink};

// Pipeline types
pub use crate::pipeline::{
    BatchDispatcher, DEFAULT_MAX_WORKERS, GroupResult, GroupRunner, RunReport, RunSummary,
    aggregate, attempt_item, run_parallel, run_sequential,
};

// IO types
pub use crate::io::{IoError, write_report};

// App types
pub use crate::app::{AppError, CliApp, Strategy};
