//! Transform unit - per-record entry point called by the migration driver

use crate::transfer::sink::emit;
use crate::transfer::{GovernanceFlags, ImportLog, MappingContext, SourceRecord, TargetDraft};

use super::governor::{AutomationGovernor, SystemFieldGovernor};
use super::mapper::{FieldMapper, MappingSummary};
use super::TransformError;

/// Progress of a single transform call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformState {
    Initialized,
    GovernanceApplied,
    FieldsMapped,
    Done,
}

impl TransformState {
    /// The only state this one may move to
    pub fn next(self) -> Option<TransformState> {
        match self {
            TransformState::Initialized => Some(TransformState::GovernanceApplied),
            TransformState::GovernanceApplied => Some(TransformState::FieldsMapped),
            TransformState::FieldsMapped => Some(TransformState::Done),
            TransformState::Done => None,
        }
    }

    /// Move to `to`, rejecting anything but the next state
    fn advance(&mut self, to: TransformState) -> Result<(), TransformError> {
        if self.next() != Some(to) {
            return Err(TransformError::InvalidTransition { from: *self, to });
        }
        *self = to;
        Ok(())
    }
}

impl std::fmt::Display for TransformState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformState::Initialized => write!(f, "initialized"),
            TransformState::GovernanceApplied => write!(f, "governance-applied"),
            TransformState::FieldsMapped => write!(f, "fields-mapped"),
            TransformState::Done => write!(f, "done"),
        }
    }
}

/// What happened during one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub state: TransformState,
    /// Governance decided for this draft
    pub flags: GovernanceFlags,
    pub mapping: MappingSummary,
}

/// Draft handed back to the driver, with the report
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub draft: TargetDraft,
    pub report: TransformReport,
}

/// Governance plus conditional mapping, in that order, once per record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformUnit {
    automation: AutomationGovernor,
    mapper: FieldMapper,
}

impl TransformUnit {
    pub fn new(automation: AutomationGovernor, mapper: FieldMapper) -> Self {
        TransformUnit { automation, mapper }
    }

    /// Transform one source record into `draft` and return it.
    ///
    /// Governance is decided once, before any field is written.
    pub fn transform(
        &self,
        source: &SourceRecord,
        ctx: &MappingContext,
        sink: &dyn ImportLog,
        mut draft: TargetDraft,
    ) -> Result<TransformOutcome, TransformError> {
        let mut state = TransformState::Initialized;

        SystemFieldGovernor::disable_auto_system_fields(&mut draft);
        if self.automation.apply(&mut draft) {
            emit(sink, log::Level::Debug, "Automation suppressed for this record");
        }
        state.advance(TransformState::GovernanceApplied)?;

        let mapping = self
            .mapper
            .map_conditional_fields(ctx, source, &mut draft, sink)?;
        state.advance(TransformState::FieldsMapped)?;

        emit(
            sink,
            log::Level::Debug,
            &format!(
                "Mapped {} field(s), skipped {}",
                mapping.applied_count(),
                mapping.skipped_count()
            ),
        );
        state.advance(TransformState::Done)?;

        let report = TransformReport {
            state,
            flags: draft.flags(),
            mapping,
        };
        Ok(TransformOutcome { draft, report })
    }

    /// Transform each source into a fresh empty draft, preserving order
    pub fn transform_all(
        &self,
        sources: &[SourceRecord],
        ctx: &MappingContext,
        sink: &dyn ImportLog,
    ) -> Vec<Result<TransformOutcome, TransformError>> {
        log::debug!(
            "Transforming {} record(s) with {} rule(s)",
            sources.len(),
            ctx.rules.len()
        );

        sources
            .iter()
            .map(|source| self.transform(source, ctx, sink, TargetDraft::new()))
            .collect()
    }
}
