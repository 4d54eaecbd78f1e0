//! Counters for absorbed animation faults
//!
//! Misconfigured animations never fail loudly. These counters let hosts and
//! tests see how many operations went inert and why.

use crate::error::AnimationError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Operation starts, including ones that went inert
    pub operations_started: u64,
    /// Starts that failed to bind their attribute
    pub bind_failures: u64,
    /// Starts whose start and end values had different kinds
    pub kind_mismatches: u64,
    /// Timelines that ran to completion or were stopped
    pub timelines_finished: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one operation start and its outcome
    pub fn record_start(&mut self, fault: Option<&AnimationError>) {
        self.operations_started += 1;
        match fault {
            Some(err) if err.is_binding() => self.bind_failures += 1,
            Some(_) => self.kind_mismatches += 1,
            None => {}
        }
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.operations_started += other.operations_started;
        self.bind_failures += other.bind_failures;
        self.kind_mismatches += other.kind_mismatches;
        self.timelines_finished += other.timelines_finished;
    }

    /// Any faults recorded at all
    pub fn has_faults(&self) -> bool {
        self.bind_failures > 0 || self.kind_mismatches > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motus_core::{BindError, ValueKind};

    #[test]
    fn test_record_classifies_faults() {
        let mut diag = Diagnostics::new();
        diag.record_start(None);
        diag.record_start(Some(&AnimationError::Bind(BindError::UnknownAttribute(
            "x".into(),
        ))));
        diag.record_start(Some(&AnimationError::TargetDropped));
        diag.record_start(Some(&AnimationError::KindMismatch {
            from: ValueKind::Scalar,
            to: ValueKind::Color,
        }));

        assert_eq!(diag.operations_started, 4);
        assert_eq!(diag.bind_failures, 2);
        assert_eq!(diag.kind_mismatches, 1);
        assert!(diag.has_faults());
    }

    #[test]
    fn test_merge() {
        let mut a = Diagnostics {
            operations_started: 2,
            ..Default::default()
        };
        a.merge(Diagnostics {
            operations_started: 1,
            timelines_finished: 1,
            ..Default::default()
        });
        assert_eq!(a.operations_started, 3);
        assert_eq!(a.timelines_finished, 1);
        assert!(!a.has_faults());
    }
}
