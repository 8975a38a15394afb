//! Core types for the Ferâiz engine: the heir registry, heir counts and share maps

use crate::error::{EngineError, Result};
use crate::fraction::Fraction;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Heir categories known to the engine.
///
/// The set is closed. Declaration order is the order used for iteration,
/// serialization and the remainder return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeirKey {
    Husband,
    Wife,
    Son,
    Daughter,
    SonsSon,
    SonsDaughter,
    Father,
    Mother,
    PaternalGrandfather,
    MaternalGrandmother,
    PaternalGrandmother,
    FullBrother,
    FullSister,
    PaternalHalfBrother,
    PaternalHalfSister,
    MaternalSibling,
    PaternalUncle,
    PaternalUnclesSon,
}

impl HeirKey {
    /// Number of heir categories.
    pub const COUNT: usize = 18;

    /// All categories in declaration order.
    pub const ALL: [HeirKey; HeirKey::COUNT] = [
        HeirKey::Husband,
        HeirKey::Wife,
        HeirKey::Son,
        HeirKey::Daughter,
        HeirKey::SonsSon,
        HeirKey::SonsDaughter,
        HeirKey::Father,
        HeirKey::Mother,
        HeirKey::PaternalGrandfather,
        HeirKey::MaternalGrandmother,
        HeirKey::PaternalGrandmother,
        HeirKey::FullBrother,
        HeirKey::FullSister,
        HeirKey::PaternalHalfBrother,
        HeirKey::PaternalHalfSister,
        HeirKey::MaternalSibling,
        HeirKey::PaternalUncle,
        HeirKey::PaternalUnclesSon,
    ];

    /// Siblings of the deceased, counted for the mother's share.
    pub const SIBLINGS: [HeirKey; 5] = [
        HeirKey::FullBrother,
        HeirKey::FullSister,
        HeirKey::PaternalHalfBrother,
        HeirKey::PaternalHalfSister,
        HeirKey::MaternalSibling,
    ];

    /// Collateral heirs excluded by a male descendant or a male ascendant.
    pub const COLLATERALS: [HeirKey; 7] = [
        HeirKey::FullBrother,
        HeirKey::FullSister,
        HeirKey::PaternalHalfBrother,
        HeirKey::PaternalHalfSister,
        HeirKey::MaternalSibling,
        HeirKey::PaternalUncle,
        HeirKey::PaternalUnclesSon,
    ];

    /// Stable identifier used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeirKey::Husband => "husband",
            HeirKey::Wife => "wife",
            HeirKey::Son => "son",
            HeirKey::Daughter => "daughter",
            HeirKey::SonsSon => "sons_son",
            HeirKey::SonsDaughter => "sons_daughter",
            HeirKey::Father => "father",
            HeirKey::Mother => "mother",
            HeirKey::PaternalGrandfather => "paternal_grandfather",
            HeirKey::MaternalGrandmother => "maternal_grandmother",
            HeirKey::PaternalGrandmother => "paternal_grandmother",
            HeirKey::FullBrother => "full_brother",
            HeirKey::FullSister => "full_sister",
            HeirKey::PaternalHalfBrother => "paternal_half_brother",
            HeirKey::PaternalHalfSister => "paternal_half_sister",
            HeirKey::MaternalSibling => "maternal_sibling",
            HeirKey::PaternalUncle => "paternal_uncle",
            HeirKey::PaternalUnclesSon => "paternal_uncles_son",
        }
    }

    /// Human-readable name used in the reasoning log.
    pub fn name(&self) -> &'static str {
        match self {
            HeirKey::Husband => "Husband",
            HeirKey::Wife => "Wife",
            HeirKey::Son => "Son",
            HeirKey::Daughter => "Daughter",
            HeirKey::SonsSon => "Son's son",
            HeirKey::SonsDaughter => "Son's daughter",
            HeirKey::Father => "Father",
            HeirKey::Mother => "Mother",
            HeirKey::PaternalGrandfather => "Paternal grandfather",
            HeirKey::MaternalGrandmother => "Maternal grandmother",
            HeirKey::PaternalGrandmother => "Paternal grandmother",
            HeirKey::FullBrother => "Full brother",
            HeirKey::FullSister => "Full sister",
            HeirKey::PaternalHalfBrother => "Paternal half-brother",
            HeirKey::PaternalHalfSister => "Paternal half-sister",
            HeirKey::MaternalSibling => "Maternal sibling",
            HeirKey::PaternalUncle => "Paternal uncle",
            HeirKey::PaternalUnclesSon => "Paternal uncle's son",
        }
    }

    pub fn is_spouse(&self) -> bool {
        matches!(self, HeirKey::Husband | HeirKey::Wife)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for HeirKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeirKey {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        HeirKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EngineError::UnknownHeir(s.to_string()))
    }
}

/// Number of heirs present in each category. Absent categories count as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeirCounts {
    counts: [u32; HeirKey::COUNT],
}

impl HeirCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, key: HeirKey, count: u32) -> Self {
        self.set(key, count);
        self
    }

    pub fn get(&self, key: HeirKey) -> u32 {
        self.counts[key.index()]
    }

    pub fn set(&mut self, key: HeirKey, count: u32) {
        self.counts[key.index()] = count;
    }

    pub fn is_present(&self, key: HeirKey) -> bool {
        self.get(key) > 0
    }

    /// True when no heir of any category is present.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of the counts of the given categories.
    pub fn total_of(&self, keys: &[HeirKey]) -> u64 {
        keys.iter().map(|&k| u64::from(self.get(k))).sum()
    }

    /// Present categories with their counts, in registry order.
    pub fn present(&self) -> impl Iterator<Item = (HeirKey, u32)> + '_ {
        HeirKey::ALL
            .iter()
            .map(|&k| (k, self.get(k)))
            .filter(|&(_, c)| c > 0)
    }

    /// A son or a son's son is present.
    pub fn has_male_child(&self) -> bool {
        self.is_present(HeirKey::Son) || self.is_present(HeirKey::SonsSon)
    }

    /// Any child or son's child is present.
    pub fn has_child(&self) -> bool {
        self.has_male_child()
            || self.is_present(HeirKey::Daughter)
            || self.is_present(HeirKey::SonsDaughter)
    }

    /// Caller-side precondition: a husband and a wife cannot both be heirs.
    ///
    /// The engine does not call this. Input layers do, before calculating.
    pub fn check_spouses(&self) -> Result<()> {
        if self.is_present(HeirKey::Husband) && self.is_present(HeirKey::Wife) {
            return Err(EngineError::SpouseConflict);
        }
        Ok(())
    }
}

impl FromIterator<(HeirKey, u32)> for HeirCounts {
    fn from_iter<I: IntoIterator<Item = (HeirKey, u32)>>(iter: I) -> Self {
        let mut counts = HeirCounts::new();
        for (key, count) in iter {
            counts.set(key, count);
        }
        counts
    }
}

impl Serialize for HeirCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.present())
    }
}

/// Total share of the estate per heir category (not per individual).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShareMap {
    shares: BTreeMap<HeirKey, Fraction>,
}

impl ShareMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: HeirKey) -> Option<Fraction> {
        self.shares.get(&key).copied()
    }

    /// Share of a category, zero when unassigned.
    pub fn get_or_zero(&self, key: HeirKey) -> Fraction {
        self.get(key).unwrap_or(Fraction::ZERO)
    }

    pub fn insert(&mut self, key: HeirKey, share: Fraction) {
        self.shares.insert(key, share);
    }

    /// Add to a category's share, starting from zero if unassigned.
    pub fn add_to(&mut self, key: HeirKey, amount: Fraction) -> Result<Fraction> {
        let updated = self.get_or_zero(key).checked_add(amount)?;
        self.shares.insert(key, updated);
        Ok(updated)
    }

    pub fn contains(&self, key: HeirKey) -> bool {
        self.shares.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.shares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = HeirKey> + '_ {
        self.shares.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HeirKey, Fraction)> + '_ {
        self.shares.iter().map(|(&k, &v)| (k, v))
    }

    /// Exact sum of all assigned shares.
    pub fn total(&self) -> Result<Fraction> {
        Fraction::sum(self.shares.values())
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut Fraction> {
        self.shares.values_mut()
    }
}
