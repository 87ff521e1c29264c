//! Progress counters and verdicts

use serde::{Deserialize, Serialize};

/// Counters derived from a checklist and its recorded statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Number of items on the checklist
    pub total: usize,
    /// Items with any recorded status
    pub completed: usize,
    /// Items recorded as `pass`
    pub passed: usize,
    /// Items recorded as `fail`, critical or not
    pub failed: usize,
    /// Items recorded as `na`
    pub not_applicable: usize,
    /// Critical items recorded as `fail`
    pub critical_failed: usize,
}

impl Stats {
    /// Every item has a status
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    /// Items still waiting for a status
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Completion as a whole percentage, rounded down
    #[must_use]
    pub const fn progress_percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.completed * 100 / self.total
    }
}

/// Overall outcome of an inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Some items are still unanswered
    Incomplete,
    /// Completed without disqualifying failures
    Pass,
    /// A critical item failed, or too many items failed
    Fail,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete => write!(f, "incomplete"),
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}
