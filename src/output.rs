//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{
    CheckStatus, Checklist, InspectionHeader, InspectionRecord, RecordResult, StatusMap, Stats,
    Verdict,
};
use crate::core::services::{ScoringPolicy, can_submit, failed_items, missing_fields};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn verdict_label(verdict: Verdict) -> String {
    match verdict {
        Verdict::Pass => "PASS".green().bold().to_string(),
        Verdict::Fail => "FAIL".red().bold().to_string(),
        Verdict::Incomplete => "INCOMPLETE".yellow().to_string(),
    }
}

fn status_mark(status: Option<CheckStatus>) -> &'static str {
    match status {
        Some(CheckStatus::Pass) => "[pass]",
        Some(CheckStatus::Fail) => "[FAIL]",
        Some(CheckStatus::Na) => "[ na ]",
        None => "[    ]",
    }
}

/// One checklist line with its recorded status
#[derive(Debug, Clone, Serialize)]
pub struct ItemLine {
    /// Item id
    pub id: String,
    /// Item prompt
    pub label: String,
    /// Whether the item is critical
    pub critical: bool,
    /// Section heading
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Recorded status (`null` when unanswered)
    pub status: Option<CheckStatus>,
}

/// Gating details for an active session
#[derive(Debug, Clone, Serialize)]
pub struct SessionDetails {
    /// Identifying fields
    pub header: InspectionHeader,
    /// Required fields still blank
    pub missing_fields: Vec<String>,
    /// Whether `session submit` would succeed
    pub can_submit: bool,
}

/// Result of scoring a checklist
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Domain name
    pub domain: String,
    /// Progress counters
    pub stats: Stats,
    /// Overall verdict
    pub verdict: Verdict,
    /// Failure threshold applied
    pub max_failures: usize,
    /// Failed item ids, in checklist order
    pub failed_items: Vec<String>,
    /// Status ids not on the checklist (ignored when scoring)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
    /// Every checklist item with its status
    pub items: Vec<ItemLine>,
    /// Present when the report describes an active session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionDetails>,
}

impl ScoreReport {
    /// Score `statuses` against `checklist`
    #[must_use]
    pub fn new(checklist: &Checklist, statuses: &StatusMap, policy: &ScoringPolicy) -> Self {
        let card = policy.score(checklist.items(), statuses);
        let items = checklist
            .items()
            .iter()
            .map(|item| ItemLine {
                id: item.id.clone(),
                label: item.label.clone(),
                critical: item.critical,
                section: item.section.clone(),
                status: statuses.get(&item.id).copied(),
            })
            .collect();
        let ignored = statuses.keys().filter(|id| !checklist.contains(id)).cloned().collect();

        Self {
            domain: checklist.domain().to_string(),
            stats: card.stats,
            verdict: card.verdict,
            max_failures: policy.max_failures,
            failed_items: failed_items(checklist.items(), statuses),
            ignored,
            items,
            session: None,
        }
    }

    /// Attach session gating details
    #[must_use]
    pub fn with_header(mut self, header: &InspectionHeader) -> Self {
        self.session = Some(SessionDetails {
            header: header.clone(),
            missing_fields: missing_fields(header).iter().map(ToString::to_string).collect(),
            can_submit: can_submit(&self.stats, header),
        });
        self
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => print_json(self),
        }
    }

    /// Human-readable rendering
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if let Some(session) = &self.session {
            let h = &session.header;
            let _ = writeln!(out, "Equipment: {}", h.equipment_id);
            let _ = writeln!(out, "Location:  {}", h.location);
            let _ = writeln!(out, "Inspector: {}", h.inspector);
            let _ = writeln!(out, "Date:      {}", h.date);
            if let Some(notes) = &h.notes {
                let _ = writeln!(out, "Notes:     {notes}");
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Checklist: {}\n", self.domain);

        let mut section: Option<&str> = None;
        for item in &self.items {
            if item.section.as_deref() != section {
                section = item.section.as_deref();
                if let Some(name) = section {
                    let _ = writeln!(out, "  {name}");
                }
            }
            let flag = if item.critical { " (critical)" } else { "" };
            let _ = writeln!(out, "    {} {}{flag}", status_mark(item.status), item.id);
        }
        out.push('\n');

        let s = &self.stats;
        let _ = writeln!(
            out,
            "Progress: {}/{} ({}%)  pass {}  fail {}  n/a {}  critical failed {}",
            s.completed,
            s.total,
            s.progress_percent(),
            s.passed,
            s.failed,
            s.not_applicable,
            s.critical_failed
        );
        let _ = writeln!(out, "Verdict:  {}", verdict_label(self.verdict));
        if s.remaining() > 0 {
            let _ = writeln!(out, "{} item(s) unanswered", s.remaining());
        }

        if !self.ignored.is_empty() {
            let _ = writeln!(out, "Ignored unknown items: {}", self.ignored.join(", "));
        }

        if let Some(session) = &self.session {
            if !session.missing_fields.is_empty() {
                let _ = writeln!(out, "Missing fields: {}", session.missing_fields.join(", "));
            }
            if session.can_submit {
                let _ = writeln!(out, "\nReady to submit: inspecta session submit");
            }
        }

        out
    }
}

/// A domain with its checklist size
#[derive(Debug, Clone, Serialize)]
pub struct DomainInfo {
    /// Domain name
    pub domain: String,
    /// Number of items
    pub items: usize,
    /// Number of critical items
    pub critical: usize,
    /// Failure threshold
    pub max_failures: usize,
}

/// Result of `checklist list` without a domain
#[derive(Debug, Clone, Serialize)]
pub struct DomainListResult {
    /// Known domains
    pub domains: Vec<DomainInfo>,
}

impl DomainListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("Checklists:\n");
                for d in &self.domains {
                    println!(
                        "  {:<16} {:>3} items  {:>2} critical  max failures {}",
                        d.domain, d.items, d.critical, d.max_failures
                    );
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `checklist list <domain>`
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistResult {
    /// Domain name
    pub domain: String,
    /// Failure threshold
    pub max_failures: usize,
    /// Items in display order
    pub items: Vec<ItemLine>,
}

impl ChecklistResult {
    /// Describe a checklist
    #[must_use]
    pub fn new(checklist: &Checklist, policy: &ScoringPolicy) -> Self {
        Self {
            domain: checklist.domain().to_string(),
            max_failures: policy.max_failures,
            items: checklist
                .items()
                .iter()
                .map(|item| ItemLine {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    critical: item.critical,
                    section: item.section.clone(),
                    status: None,
                })
                .collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} ({} items, max failures {})\n", self.domain, self.items.len(), self.max_failures);
                for item in &self.items {
                    let marker = if item.critical { "!" } else { " " };
                    println!("  {marker} {:<22} {}", item.id, item.label);
                }
                println!("\n  ! = critical: a failure fails the inspection");
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `session submit`
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResult {
    /// The stored record
    pub record: InspectionRecord,
}

impl SubmitResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                let r = &self.record;
                let result = match r.result {
                    RecordResult::Pass => verdict_label(Verdict::Pass),
                    RecordResult::Fail => verdict_label(Verdict::Fail),
                };
                println!("Submitted {} ({}): {result}", r.id, r.domain);
                if !r.failed_items.is_empty() {
                    println!("Failed items: {}", r.failed_items.join(", "));
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of `history`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResult {
    /// Matching records, oldest first
    pub records: Vec<InspectionRecord>,
}

impl HistoryResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.records.is_empty() {
                    println!("No inspections recorded.");
                    return;
                }
                for r in &self.records {
                    println!(
                        "{:<8} {:<16} {:<10} {:<12} {:<4} failed {} (critical {})",
                        r.id,
                        r.domain.to_string(),
                        r.header.date,
                        r.header.equipment_id,
                        r.result,
                        r.failed_count(),
                        r.critical_failed_count()
                    );
                }
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Successful operation with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => print_json(self),
        }
    }
}
