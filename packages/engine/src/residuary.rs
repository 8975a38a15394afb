//! Residuary distribution (asabe)
//!
//! A positive remainder goes to the nearest residuary class present. The
//! classes are tried in a fixed order and the first match takes everything:
//! descendants, then the father, then full siblings, then the paternal uncle.

use crate::config::{FEMALE_UNITS, MALE_UNITS};
use crate::error::Result;
use crate::fraction::Fraction;
use crate::trace::{ReasoningLog, Stage};
use crate::types::{HeirCounts, HeirKey, ShareMap};

/// How a residuary class takes the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// Split per head, a male taking twice a female's portion.
    Weighted { male: HeirKey, female: HeirKey },
    /// One category takes it all, on top of any fixed share.
    Whole(HeirKey),
}

/// A residuary class, selected when its trigger heir is present.
#[derive(Debug, Clone, Copy)]
pub struct ResiduaryRule {
    pub trigger: HeirKey,
    pub claim: Claim,
    message: &'static str,
}

/// Residuary classes in priority order.
pub static RESIDUARY_RULES: [ResiduaryRule; 4] = [
    ResiduaryRule {
        trigger: HeirKey::Son,
        claim: Claim::Weighted {
            male: HeirKey::Son,
            female: HeirKey::Daughter,
        },
        message: "Son(s) take the remainder, daughters sharing at half a son's portion",
    },
    ResiduaryRule {
        trigger: HeirKey::Father,
        claim: Claim::Whole(HeirKey::Father),
        message: "Father takes the remainder",
    },
    ResiduaryRule {
        trigger: HeirKey::FullBrother,
        claim: Claim::Weighted {
            male: HeirKey::FullBrother,
            female: HeirKey::FullSister,
        },
        message: "Full brother(s) take the remainder, full sisters sharing at half a brother's portion",
    },
    ResiduaryRule {
        trigger: HeirKey::PaternalUncle,
        claim: Claim::Whole(HeirKey::PaternalUncle),
        message: "Paternal uncle takes the remainder",
    },
];

/// The first residuary class whose trigger heir is present.
pub fn find_claimant(counts: &HeirCounts) -> Option<&'static ResiduaryRule> {
    RESIDUARY_RULES
        .iter()
        .find(|rule| counts.is_present(rule.trigger))
}

/// Split `amount` per head between a male and a female category.
pub fn weighted_split(
    shares: &mut ShareMap,
    counts: &HeirCounts,
    male: HeirKey,
    female: HeirKey,
    amount: Fraction,
) -> Result<()> {
    let males = i64::from(counts.get(male));
    let females = i64::from(counts.get(female));
    let total_units = males * MALE_UNITS + females * FEMALE_UNITS;
    let unit = amount.div_int(total_units)?;

    if males > 0 {
        shares.add_to(male, unit.mul_int(MALE_UNITS * males)?)?;
    }
    if females > 0 {
        shares.add_to(female, unit.mul_int(FEMALE_UNITS * females)?)?;
    }
    Ok(())
}

/// Give the remainder to the nearest residuary class.
///
/// Returns what is left unclaimed: zero when a class took it, otherwise the
/// remainder unchanged.
pub fn distribute_residue(
    shares: &mut ShareMap,
    counts: &HeirCounts,
    remainder: Fraction,
    log: &mut ReasoningLog,
) -> Result<Fraction> {
    if !remainder.is_positive() {
        return Ok(remainder);
    }

    let Some(rule) = find_claimant(counts) else {
        tracing::debug!(remainder = %remainder, "No residuary heir present");
        return Ok(remainder);
    };

    match rule.claim {
        Claim::Weighted { male, female } => weighted_split(shares, counts, male, female, remainder)?,
        Claim::Whole(heir) => {
            shares.add_to(heir, remainder)?;
        }
    }

    tracing::debug!(trigger = %rule.trigger, remainder = %remainder, "Residue distributed");
    log.record(Stage::Residuary, format!("{}: {remainder}", rule.message));

    Ok(Fraction::ZERO)
}
