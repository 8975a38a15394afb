//! Reasoning log for audit trails
//!
//! Every rule that fires during a calculation appends one or more entries
//! explaining what it decided and why. The log is part of the result, not a
//! diagnostic channel: display layers render it verbatim so that a reader can
//! follow how each share was reached.
//!
//! # Example
//!
//! ```ignore
//! use feraiz_engine::trace::{ReasoningLog, Stage};
//!
//! let mut log = ReasoningLog::new();
//! log.record(Stage::FixedShare, "Husband: 1/4 (the deceased left a child)");
//! assert_eq!(log.messages().count(), 1);
//! ```

use serde::Serialize;
use std::fmt;

/// Pipeline stage that produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Exclusion of farther heirs by nearer ones (hacb)
    Blocking,
    /// Fixed Quranic shares (ferâiz)
    FixedShare,
    /// Proportional scale-down (avl)
    Adjustment,
    /// Residuary distribution (asabe)
    Residuary,
    /// Return of an unclaimed remainder (radd)
    Return,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Blocking => "blocking",
            Stage::FixedShare => "fixed_share",
            Stage::Adjustment => "adjustment",
            Stage::Residuary => "residuary",
            Stage::Return => "return",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single explanation line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub stage: Stage,
    pub message: String,
}

/// Ordered, append-only sequence of explanations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReasoningLog {
    entries: Vec<LogEntry>,
}

impl ReasoningLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, stage: Stage, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(stage = %stage, %message, "reasoning");
        self.entries.push(LogEntry { stage, message });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// The plain explanation strings, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    /// Entries produced by one stage.
    pub fn for_stage(&self, stage: Stage) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().filter(move |e| e.stage == stage)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as numbered lines prefixed with their stage.
    ///
    /// ```text
    /// 1. [blocking] Father excludes the paternal grandfather
    /// 2. [fixed_share] Wife: 1/4 (no child)
    /// ```
    pub fn render(&self) -> String {
        self.into_iter()
            .enumerate()
            .map(|(i, e)| format!("{}. [{}] {}", i + 1, e.stage, e.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a ReasoningLog {
    type Item = &'a LogEntry;
    type IntoIter = std::slice::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
