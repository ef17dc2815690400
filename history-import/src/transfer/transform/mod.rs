//! Transform unit and its components

mod check;
mod error;
mod governor;
mod mapper;
mod unit;

pub use check::{DEFAULT_DATE_FORMAT, DateCheck, malformed_timestamp};
pub use error::TransformError;
pub use governor::{AutomationGovernor, SystemFieldGovernor};
pub use mapper::{FieldMapper, MappingSummary};
pub use unit::{TransformOutcome, TransformReport, TransformState, TransformUnit};
