//! Record transformation for historical bulk imports.
//!
//! A migration driver calls [`transfer::TransformUnit::transform`] once per
//! legacy record. The unit hands system-managed timestamps over to the
//! caller, optionally suppresses write automation, then copies the mapped
//! source fields that are present into the target draft.

pub mod config;
pub mod transfer;

pub use config::ImportConfig;
pub use transfer::{
    MappingContext, SourceRecord, TargetDraft, TransformOutcome, TransformUnit,
};
