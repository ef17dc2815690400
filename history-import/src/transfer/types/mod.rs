//! Core types for historical imports

mod value;
mod record;
mod context;

pub use value::*;
pub use record::*;
pub use context::*;
