//! Distribution engine
//!
//! Runs the full pipeline for one estate:
//!
//! 1. blocking (hacb), on the counts
//! 2. fixed shares (ferâiz)
//! 3. proportional scale-down (avl), when the shares exceed the estate
//! 4. residuary distribution (asabe), when a remainder is left
//! 5. return (radd), when the remainder found no residuary heir
//!
//! [`calculate`] is a pure function: every invocation builds its own state
//! from the immutable input and hands it back in the result.
//!
//! # Example
//!
//! ```ignore
//! use feraiz_engine::{calculate, HeirCounts, HeirKey};
//!
//! let counts = HeirCounts::new()
//!     .with(HeirKey::Husband, 1)
//!     .with(HeirKey::Son, 1);
//!
//! let result = calculate(&counts)?;
//! assert_eq!(result.shares().get(HeirKey::Son).unwrap().to_string(), "3/4");
//! for line in result.log().messages() {
//!     println!("{line}");
//! }
//! ```

use crate::adjustment::apply_adjustment;
use crate::blocking::apply_blocking;
use crate::error::Result;
use crate::fixed_shares::assign_fixed_shares;
use crate::fraction::Fraction;
use crate::remainder_return::distribute_return;
use crate::residuary::distribute_residue;
use crate::trace::ReasoningLog;
use crate::types::{HeirCounts, HeirKey, ShareMap};
use serde::Serialize;

/// Result of a distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    /// Total share per heir category
    shares: ShareMap,
    /// Explanation of every rule that fired, in order
    log: ReasoningLog,
    /// Part of the estate no heir could take (nonzero only when there was
    /// neither a residuary heir nor a non-spouse fixed-share heir)
    unassigned: Fraction,
}

impl CalculationResult {
    pub fn shares(&self) -> &ShareMap {
        &self.shares
    }

    pub fn log(&self) -> &ReasoningLog {
        &self.log
    }

    pub fn unassigned(&self) -> Fraction {
        self.unassigned
    }

    /// Sum of all assigned shares.
    pub fn total(&self) -> Result<Fraction> {
        self.shares.total()
    }

    /// Share of one individual of a category: the category total divided by
    /// its count. `None` if the category received nothing or has no members.
    pub fn per_heir(&self, key: HeirKey, counts: &HeirCounts) -> Result<Option<Fraction>> {
        let count = counts.get(key);
        match self.shares.get(key) {
            Some(share) if count > 0 => Ok(Some(share.div_int(i64::from(count))?)),
            _ => Ok(None),
        }
    }
}

/// Compute the shares of every heir for the given counts.
///
/// The husband/wife precondition is the caller's responsibility
/// (see [`HeirCounts::check_spouses`]).
///
/// # Errors
/// Only arithmetic failures ([`EngineError::is_arithmetic`](crate::EngineError::is_arithmetic)),
/// which abort the calculation without a partial result.
pub fn calculate(counts: &HeirCounts) -> Result<CalculationResult> {
    let mut log = ReasoningLog::new();

    if counts.is_empty() {
        tracing::debug!("No heirs present, nothing to distribute");
        return Ok(CalculationResult {
            shares: ShareMap::new(),
            log,
            unassigned: Fraction::ONE,
        });
    }

    let eligible = apply_blocking(counts, &mut log);
    tracing::debug!(heirs = ?eligible.present().collect::<Vec<_>>(), "Blocking complete");

    let mut shares = assign_fixed_shares(&eligible, &mut log)?;
    apply_adjustment(&mut shares, &mut log)?;

    let remainder = Fraction::ONE.checked_sub(shares.total()?)?;
    tracing::debug!(remainder = %remainder, "Fixed shares complete");

    let remainder = distribute_residue(&mut shares, &eligible, remainder, &mut log)?;
    let unassigned = distribute_return(&mut shares, remainder, &mut log)?;

    Ok(CalculationResult {
        shares,
        log,
        unassigned,
    })
}
