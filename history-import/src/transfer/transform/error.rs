//! Errors raised inside a transform call

use super::TransformState;

/// Error from transform operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A rule would write a store-managed field while the store still owns it.
    /// The value would be overwritten at persist time.
    GovernanceNotApplied { target_field: String },
    /// The unit tried to move between states out of order
    InvalidTransition {
        from: TransformState,
        to: TransformState,
    },
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::GovernanceNotApplied { target_field } => write!(
                f,
                "{}: automatic system fields are still enabled, historical value would be lost",
                target_field
            ),
            TransformError::InvalidTransition { from, to } => {
                write!(f, "invalid transform transition {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for TransformError {}
