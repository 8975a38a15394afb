//! Blocking (hacb): exclusion of farther heirs by nearer relatives
//!
//! Rules are evaluated in table order against the counts as left by the
//! previous rule. A rule that fires zeroes every listed category still present
//! and records why. Applying the stage to its own output leaves the counts
//! unchanged, though a son's rule is logged again on every pass.

use crate::trace::{ReasoningLog, Stage};
use crate::types::{HeirCounts, HeirKey};

/// How a firing rule reports in the reasoning log.
#[derive(Debug, Clone, Copy)]
enum Report {
    /// One line per excluded category: "<blocker> excludes <heir>".
    PerHeir(&'static str),
    /// A single line for the whole rule, when something was excluded.
    Once(&'static str),
    /// A single line whenever the condition holds.
    Always(&'static str),
}

/// A declarative exclusion rule: condition -> categories forced to zero.
#[derive(Clone, Copy)]
pub struct BlockingRule {
    pub name: &'static str,
    applies: fn(&HeirCounts) -> bool,
    pub excludes: &'static [HeirKey],
    report: Report,
}

impl BlockingRule {
    /// Whether the rule's condition holds for these counts.
    pub fn applies(&self, counts: &HeirCounts) -> bool {
        (self.applies)(counts)
    }

    /// Apply the rule, returning the categories it actually excluded.
    pub fn apply(&self, counts: &mut HeirCounts, log: &mut ReasoningLog) -> Vec<HeirKey> {
        if !self.applies(counts) {
            return Vec::new();
        }

        let excluded: Vec<HeirKey> = self
            .excludes
            .iter()
            .copied()
            .filter(|&k| counts.is_present(k))
            .collect();

        for &key in self.excludes {
            counts.set(key, 0);
        }

        if excluded.is_empty() && !matches!(self.report, Report::Always(_)) {
            return excluded;
        }

        tracing::debug!(rule = self.name, excluded = ?excluded, "Blocking rule fired");

        match self.report {
            Report::PerHeir(blocker) => {
                for key in &excluded {
                    log.record(
                        Stage::Blocking,
                        format!("{} excludes the {}", blocker, key.name().to_lowercase()),
                    );
                }
            }
            Report::Once(message) | Report::Always(message) => log.record(Stage::Blocking, message),
        }

        excluded
    }
}

fn father_present(c: &HeirCounts) -> bool {
    c.is_present(HeirKey::Father)
}

fn mother_and_grandmother_present(c: &HeirCounts) -> bool {
    c.is_present(HeirKey::Mother)
        && (c.is_present(HeirKey::MaternalGrandmother)
            || c.is_present(HeirKey::PaternalGrandmother))
}

fn son_present(c: &HeirCounts) -> bool {
    c.is_present(HeirKey::Son)
}

fn male_line_present(c: &HeirCounts) -> bool {
    c.has_male_child() || c.is_present(HeirKey::Father) || c.is_present(HeirKey::PaternalGrandfather)
}

/// The exclusion rules, in evaluation order.
pub static BLOCKING_RULES: [BlockingRule; 4] = [
    BlockingRule {
        name: "father_excludes_paternal_ascendants",
        applies: father_present,
        excludes: &[HeirKey::PaternalGrandfather, HeirKey::PaternalGrandmother],
        report: Report::PerHeir("Father"),
    },
    BlockingRule {
        name: "mother_excludes_grandmothers",
        applies: mother_and_grandmother_present,
        excludes: &[HeirKey::MaternalGrandmother, HeirKey::PaternalGrandmother],
        report: Report::Once("Mother excludes both grandmothers"),
    },
    BlockingRule {
        name: "son_excludes_sons_children",
        applies: son_present,
        excludes: &[HeirKey::SonsSon, HeirKey::SonsDaughter],
        report: Report::Always("Son excludes the son's son and the son's daughter"),
    },
    BlockingRule {
        name: "male_line_excludes_collaterals",
        applies: male_line_present,
        excludes: &HeirKey::COLLATERALS,
        report: Report::Once(
            "A male descendant (son, son's son) or a male ascendant (father, grandfather) \
             excludes the siblings and the paternal uncles",
        ),
    },
];

/// Run every blocking rule and return the counts that remain eligible.
pub fn apply_blocking(counts: &HeirCounts, log: &mut ReasoningLog) -> HeirCounts {
    let mut remaining = *counts;
    for rule in &BLOCKING_RULES {
        rule.apply(&mut remaining, log);
    }
    remaining
}
