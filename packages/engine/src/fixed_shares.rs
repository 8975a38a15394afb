//! Fixed shares (ferâiz)
//!
//! Assigns the Quranic fractions to the spouse, the parents and the daughters.
//! Each heir's rule is a separate function returning the share and the reason,
//! evaluated against the counts left after blocking.

use crate::error::Result;
use crate::fraction::Fraction;
use crate::trace::{ReasoningLog, Stage};
use crate::types::{HeirCounts, HeirKey, ShareMap};

/// A share decided by one rule, with the reason logged for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub heir: HeirKey,
    pub share: Fraction,
    pub reason: String,
}

impl Assignment {
    fn new(heir: HeirKey, share: Fraction, reason: impl Into<String>) -> Self {
        Self {
            heir,
            share,
            reason: reason.into(),
        }
    }
}

/// Husband: 1/4 with a child, else 1/2. Wife: 1/8 with a child, else 1/4.
pub fn spouse_shares(counts: &HeirCounts) -> Vec<Assignment> {
    let has_child = counts.has_child();
    let mut assignments = Vec::new();

    if counts.is_present(HeirKey::Husband) {
        assignments.push(if has_child {
            Assignment::new(HeirKey::Husband, Fraction::QUARTER, "Husband: 1/4 (a child is present)")
        } else {
            Assignment::new(HeirKey::Husband, Fraction::HALF, "Husband: 1/2 (no child)")
        });
    }

    if counts.is_present(HeirKey::Wife) {
        assignments.push(if has_child {
            Assignment::new(HeirKey::Wife, Fraction::EIGHTH, "Wife: 1/8 (a child is present)")
        } else {
            Assignment::new(HeirKey::Wife, Fraction::QUARTER, "Wife: 1/4 (no child)")
        });
    }

    assignments
}

/// Father: 1/6 beside any child. Without children he takes no fixed share and
/// is left to the residuary stage (recorded as an explicit zero).
pub fn father_share(counts: &HeirCounts) -> Option<Assignment> {
    if !counts.is_present(HeirKey::Father) {
        return None;
    }

    let assignment = if counts.has_male_child() {
        Assignment::new(HeirKey::Father, Fraction::SIXTH, "Father: 1/6 (a male child is present)")
    } else if counts.is_present(HeirKey::Daughter) || counts.is_present(HeirKey::SonsDaughter) {
        Assignment::new(
            HeirKey::Father,
            Fraction::SIXTH,
            "Father: 1/6 plus the residue (only female children are present)",
        )
    } else {
        Assignment::new(
            HeirKey::Father,
            Fraction::ZERO,
            "Father: residuary only (no child)",
        )
    };
    Some(assignment)
}

/// Whether the Umariyyah case applies to the mother: father and a spouse
/// present, no child and fewer than two siblings.
pub fn is_umariyyah(counts: &HeirCounts) -> bool {
    counts.is_present(HeirKey::Father)
        && (counts.is_present(HeirKey::Husband) || counts.is_present(HeirKey::Wife))
        && !counts.has_child()
        && counts.total_of(&HeirKey::SIBLINGS) < 2
}

/// Mother: 1/6 beside a child or two or more siblings; in the Umariyyah case
/// one third of what the spouse leaves; otherwise 1/3.
pub fn mother_share(counts: &HeirCounts, spouse_total: Fraction) -> Result<Option<Assignment>> {
    if !counts.is_present(HeirKey::Mother) {
        return Ok(None);
    }

    let sibling_count = counts.total_of(&HeirKey::SIBLINGS);

    let assignment = if counts.has_child() || sibling_count >= 2 {
        Assignment::new(
            HeirKey::Mother,
            Fraction::SIXTH,
            "Mother: 1/6 (a child or two or more siblings are present)",
        )
    } else if is_umariyyah(counts) {
        let share = Fraction::ONE
            .checked_sub(spouse_total)?
            .checked_mul(Fraction::THIRD)?;
        Assignment::new(
            HeirKey::Mother,
            share,
            format!("Mother: {share} (Umariyyah: one third of what remains after the spouse's share)"),
        )
    } else {
        Assignment::new(HeirKey::Mother, Fraction::THIRD, "Mother: 1/3")
    };
    Ok(Some(assignment))
}

/// Daughters without a son: 1/2 for a single daughter, 2/3 for two or more.
/// Beside a son they take no fixed share and inherit as residuaries.
pub fn daughters_share(counts: &HeirCounts) -> Option<Assignment> {
    let daughters = counts.get(HeirKey::Daughter);
    if daughters == 0 || counts.is_present(HeirKey::Son) {
        return None;
    }

    Some(if daughters == 1 {
        Assignment::new(HeirKey::Daughter, Fraction::HALF, "Daughter: 1/2 (a single daughter)")
    } else {
        Assignment::new(
            HeirKey::Daughter,
            Fraction::TWO_THIRDS,
            format!("Daughters: 2/3 shared by {daughters} daughters"),
        )
    })
}

/// Assign all fixed shares, logging each one.
pub fn assign_fixed_shares(counts: &HeirCounts, log: &mut ReasoningLog) -> Result<ShareMap> {
    let mut shares = ShareMap::new();

    let spouses = spouse_shares(counts);
    let spouse_total = Fraction::sum(spouses.iter().map(|a| &a.share))?;

    let assignments = spouses
        .into_iter()
        .chain(father_share(counts))
        .chain(mother_share(counts, spouse_total)?)
        .chain(daughters_share(counts));

    for assignment in assignments {
        tracing::debug!(heir = %assignment.heir, share = %assignment.share, "Fixed share assigned");
        log.record(Stage::FixedShare, assignment.reason);
        shares.insert(assignment.heir, assignment.share);
    }

    Ok(shares)
}
