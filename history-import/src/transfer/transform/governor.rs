//! Governance over store-side write behaviour

use crate::transfer::TargetDraft;

/// Hands the created/updated timestamps over to the caller
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemFieldGovernor;

impl SystemFieldGovernor {
    /// Turn off automatic system-field generation. Idempotent.
    pub fn disable_auto_system_fields(draft: &mut TargetDraft) {
        draft.set_auto_system_fields(false);
    }
}

/// Optionally switches off validation/derivation rules for bulk writes.
///
/// Inactive unless the run opts in: some imports still rely on store rules,
/// others need them off so derived fields don't clobber imported history.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutomationGovernor {
    suppress_automation: bool,
}

impl AutomationGovernor {
    pub fn new(suppress_automation: bool) -> Self {
        Self {
            suppress_automation,
        }
    }

    /// Apply the policy to a draft. Returns true if automation was disabled.
    pub fn apply(&self, draft: &mut TargetDraft) -> bool {
        if self.suppress_automation {
            draft.set_automation_enabled(false);
        }
        self.suppress_automation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disable_auto_system_fields_is_idempotent() {
        let mut draft = TargetDraft::new();
        SystemFieldGovernor::disable_auto_system_fields(&mut draft);
        let once = draft.clone();
        SystemFieldGovernor::disable_auto_system_fields(&mut draft);

        assert_eq!(draft, once);
        assert!(!draft.flags().auto_system_fields);
    }

    #[test]
    fn test_automation_left_enabled_by_default() {
        let mut draft = TargetDraft::new();
        let suppressed = AutomationGovernor::default().apply(&mut draft);

        assert!(!suppressed);
        assert!(draft.flags().automation_enabled);
    }

    #[test]
    fn test_automation_suppressed_when_opted_in() {
        let mut draft = TargetDraft::new();
        let suppressed = AutomationGovernor::new(true).apply(&mut draft);

        assert!(suppressed);
        assert!(!draft.flags().automation_enabled);
        // Timestamp governance is untouched
        assert!(draft.flags().auto_system_fields);
    }
}
