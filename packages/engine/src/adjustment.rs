//! Proportional scale-down (avl)
//!
//! When the fixed shares add up to more than the whole estate, every share is
//! divided by their total. Relative proportions are preserved and the new
//! total is exactly one.

use crate::error::Result;
use crate::fraction::Fraction;
use crate::trace::{ReasoningLog, Stage};
use crate::types::ShareMap;

/// Scale the shares down if they exceed the estate.
///
/// Returns the pre-adjustment total when an adjustment was made.
pub fn apply_adjustment(shares: &mut ShareMap, log: &mut ReasoningLog) -> Result<Option<Fraction>> {
    let total = shares.total()?;
    if total <= Fraction::ONE {
        return Ok(None);
    }

    for share in shares.values_mut() {
        *share = share.checked_div(total)?;
    }

    tracing::debug!(total = %total, "Shares exceeded the estate, scaled down");
    log.record(
        Stage::Adjustment,
        format!("Fixed shares total {total}, which exceeds the estate; every share is divided by {total}"),
    );

    Ok(Some(total))
}
