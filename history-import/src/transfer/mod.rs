//! Historical record transformation
//!
//! Turns one legacy source record into a target draft whose system-managed
//! timestamps carry historical values instead of store-generated ones.

pub mod types;
pub mod transform;
pub mod sink;

pub use types::*;
pub use transform::{
    AutomationGovernor, DateCheck, FieldMapper, MappingSummary, SystemFieldGovernor,
    TransformError, TransformOutcome, TransformReport, TransformState, TransformUnit,
};
pub use sink::{FacadeLog, ImportLog, LogSinkError, MemoryLog, NullLog};
