//! Typed per-unit outcomes and run tallies.

use std::fmt;

/// Outcome of one unit's installation attempt.
///
/// Failures carry a reason instead of being swallowed; independent units
/// keep going past a single failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitOutcome {
    /// The unit was installed by this run.
    Installed,
    /// The presence probe succeeded; nothing was invoked.
    AlreadyPresent,
    /// The unit's install action failed.
    Failed(String),
}

/// Tally for one dispatcher operation (or a merged profile run).
///
/// Ephemeral: created fresh per menu action, reported, and discarded.
/// `attempted` counts units whose install action was actually issued;
/// already-present units are counted separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub already_present: usize,
    pub failed: usize,
}

impl InstallReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one unit's outcome.
    pub fn record(&mut self, outcome: &UnitOutcome) {
        match outcome {
            UnitOutcome::Installed => {
                self.attempted += 1;
                self.succeeded += 1;
            }
            UnitOutcome::AlreadyPresent => {
                self.already_present += 1;
            }
            UnitOutcome::Failed(_) => {
                self.attempted += 1;
                self.failed += 1;
            }
        }
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &InstallReport) {
        self.attempted += other.attempted;
        self.succeeded += other.succeeded;
        self.already_present += other.already_present;
        self.failed += other.failed;
    }

    /// Every considered unit either succeeded or was already present.
    pub fn fully_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Units considered by the operation.
    pub fn total_considered(&self) -> usize {
        self.attempted + self.already_present
    }

    /// Nothing was considered at all.
    pub fn is_empty(&self) -> bool {
        self.total_considered() == 0
    }
}

impl fmt::Display for InstallReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} installed, {} already present, {} failed",
            self.succeeded, self.already_present, self.failed
        )
    }
}
