//! Display-ready view of a calculation
//!
//! Front ends show each heir's share as a fraction, a per-person fraction and
//! a percentage. [`DistributionReport`] collects these once so the CLI and the
//! WASM binding render the same numbers.

use crate::engine::CalculationResult;
use crate::error::Result;
use crate::fraction::Fraction;
use crate::trace::ReasoningLog;
use crate::types::{HeirCounts, HeirKey};
use serde::Serialize;

/// One heir category in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareRow {
    pub heir: HeirKey,
    pub name: &'static str,
    pub count: u32,
    pub share: Fraction,
    pub per_heir: Fraction,
    pub percentage: f64,
}

/// Shares, reasoning and anything left unassigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionReport {
    pub rows: Vec<ShareRow>,
    pub total: Fraction,
    #[serde(skip_serializing_if = "Fraction::is_zero")]
    pub unassigned: Fraction,
    pub log: ReasoningLog,
}

impl DistributionReport {
    /// Build the report; categories with a zero share are left out.
    pub fn new(counts: &HeirCounts, result: &CalculationResult) -> Result<Self> {
        let mut rows = Vec::new();
        for (heir, share) in result.shares().iter() {
            if share.is_zero() {
                continue;
            }
            let count = counts.get(heir).max(1);
            rows.push(ShareRow {
                heir,
                name: heir.name(),
                count,
                share,
                per_heir: share.div_int(i64::from(count))?,
                percentage: share.to_percentage(),
            });
        }

        Ok(Self {
            rows,
            total: result.total()?,
            unassigned: result.unassigned(),
            log: result.log().clone(),
        })
    }

    /// Plain-text table followed by the numbered reasoning log.
    pub fn render(&self) -> String {
        let mut out = format!(
            "{:<24} {:>5} {:>10} {:>10} {:>8}\n",
            "Heir", "Count", "Share", "Each", "%"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<24} {:>5} {:>10} {:>10} {:>7.2}%\n",
                row.name,
                row.count,
                row.share,
                row.per_heir,
                row.percentage
            ));
        }
        out.push_str(&format!("Total: {}\n", self.total));
        if !self.unassigned.is_zero() {
            out.push_str(&format!("Unassigned: {}\n", self.unassigned));
        }
        if !self.log.is_empty() {
            out.push('\n');
            out.push_str(&self.log.render());
            out.push('\n');
        }
        out
    }
}
