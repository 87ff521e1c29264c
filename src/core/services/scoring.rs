//! Scoring service - progress counters and verdicts
//!
//! Every inspection domain is scored by the same two functions:
//! [`compute_stats`] counts what has been recorded, and
//! [`ScoringPolicy::verdict`] classifies the counts. Both are pure.

use serde::{Deserialize, Serialize};

use crate::core::models::{CheckStatus, ChecklistItem, StatusMap, Stats, Verdict};

/// Failures tolerated on a completed checklist with no critical failure
pub const DEFAULT_MAX_FAILURES: usize = 2;

/// Thresholds applied when classifying a completed checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// A checklist with more failed items than this fails outright
    pub max_failures: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            max_failures: DEFAULT_MAX_FAILURES,
        }
    }
}

/// Counters and verdict for one checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    /// Progress counters
    pub stats: Stats,
    /// Classification of `stats`
    pub verdict: Verdict,
}

impl ScoringPolicy {
    /// Policy with a custom failure threshold
    #[must_use]
    pub const fn with_max_failures(max_failures: usize) -> Self {
        Self { max_failures }
    }

    /// Classify counters. The first matching rule wins:
    ///
    /// 1. unanswered items remain: `Incomplete`
    /// 2. any critical item failed: `Fail`
    /// 3. more than `max_failures` items failed: `Fail`
    /// 4. otherwise: `Pass`
    #[must_use]
    pub const fn verdict(&self, stats: &Stats) -> Verdict {
        if !stats.is_complete() {
            Verdict::Incomplete
        } else if stats.critical_failed > 0 || stats.failed > self.max_failures {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }

    /// Compute counters and verdict together
    #[must_use]
    pub fn score(&self, checklist: &[ChecklistItem], statuses: &StatusMap) -> Scorecard {
        let stats = compute_stats(checklist, statuses);
        Scorecard {
            stats,
            verdict: self.verdict(&stats),
        }
    }
}

/// Count recorded statuses against a checklist
///
/// Statuses for ids that are not on the checklist are ignored.
#[must_use]
pub fn compute_stats(checklist: &[ChecklistItem], statuses: &StatusMap) -> Stats {
    let mut stats = Stats {
        total: checklist.len(),
        ..Stats::default()
    };

    for item in checklist {
        let Some(status) = statuses.get(&item.id) else {
            continue;
        };

        stats.completed += 1;
        match status {
            CheckStatus::Pass => stats.passed += 1,
            CheckStatus::Fail => {
                stats.failed += 1;
                if item.critical {
                    stats.critical_failed += 1;
                }
            },
            CheckStatus::Na => stats.not_applicable += 1,
        }
    }

    stats
}

/// Classify counters with the default policy
#[must_use]
pub fn compute_verdict(stats: &Stats) -> Verdict {
    ScoringPolicy::default().verdict(stats)
}

/// Ids of failed items, in checklist order
#[must_use]
pub fn failed_items(checklist: &[ChecklistItem], statuses: &StatusMap) -> Vec<String> {
    checklist
        .iter()
        .filter(|item| statuses.get(&item.id) == Some(&CheckStatus::Fail))
        .map(|item| item.id.clone())
        .collect()
}
