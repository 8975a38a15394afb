//! Return of an unclaimed remainder (radd)
//!
//! With no residuary heir present, the remainder goes back to the fixed-share
//! heirs in proportion to what they already hold. Spouses never take part.

use crate::error::Result;
use crate::fraction::Fraction;
use crate::trace::{ReasoningLog, Stage};
use crate::types::{HeirKey, ShareMap};

/// Heirs eligible for the return: positive share, not a spouse.
pub fn return_recipients(shares: &ShareMap) -> Vec<HeirKey> {
    shares
        .iter()
        .filter(|(key, share)| !key.is_spouse() && share.is_positive())
        .map(|(key, _)| key)
        .collect()
}

/// Return the remainder to the eligible fixed-share heirs.
///
/// Returns what is still unassigned afterwards: zero when recipients existed,
/// otherwise the remainder unchanged.
pub fn distribute_return(
    shares: &mut ShareMap,
    remainder: Fraction,
    log: &mut ReasoningLog,
) -> Result<Fraction> {
    if !remainder.is_positive() {
        return Ok(remainder);
    }

    let recipients = return_recipients(shares);
    if recipients.is_empty() {
        tracing::warn!(remainder = %remainder, "No heir eligible for the return, remainder left unassigned");
        return Ok(remainder);
    }

    let base = recipients
        .iter()
        .try_fold(Fraction::ZERO, |acc, &key| acc.checked_add(shares.get_or_zero(key)))?;

    for &key in &recipients {
        let current = shares.get_or_zero(key);
        let extra = current.checked_div(base)?.checked_mul(remainder)?;
        let updated = shares.add_to(key, extra)?;
        tracing::trace!(heir = %key, extra = %extra, share = %updated, "Returned remainder");
    }

    let names: Vec<&str> = recipients.iter().map(|k| k.name()).collect();
    log.record(
        Stage::Return,
        format!(
            "No residuary heir: the remainder {remainder} is returned to {} in proportion to their shares (spouses excluded)",
            names.join(", ")
        ),
    );

    Ok(Fraction::ZERO)
}
