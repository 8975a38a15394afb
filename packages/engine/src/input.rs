//! Validation of heir counts coming from outside the library
//!
//! The engine trusts its input. Front ends (CLI, WASM) build [`HeirCounts`]
//! through [`parse_counts`], which rejects unknown heirs, oversized counts and
//! the husband/wife conflict before anything is calculated.

use crate::config::MAX_HEIR_COUNT;
use crate::error::{EngineError, Result};
use crate::types::{HeirCounts, HeirKey};
use std::collections::HashMap;

/// Build validated counts from `(identifier, count)` pairs.
///
/// Repeated identifiers are summed.
pub fn parse_counts<I, S>(entries: I) -> Result<HeirCounts>
where
    I: IntoIterator<Item = (S, u64)>,
    S: AsRef<str>,
{
    let mut totals: HashMap<HeirKey, u64> = HashMap::new();
    for (name, count) in entries {
        let key: HeirKey = name.as_ref().trim().parse()?;
        let total = totals.entry(key).or_default();
        *total = total.saturating_add(count);
    }

    let mut counts = HeirCounts::new();
    for (key, count) in totals {
        let accepted = u32::try_from(count)
            .ok()
            .filter(|&c| c <= MAX_HEIR_COUNT)
            .ok_or_else(|| EngineError::CountTooLarge {
                heir: key.to_string(),
                count,
                max: MAX_HEIR_COUNT,
            })?;
        counts.set(key, accepted);
    }

    counts.check_spouses()?;
    Ok(counts)
}

/// Parse a single `heir=count` argument.
pub fn parse_assignment(arg: &str) -> Result<(String, u64)> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| EngineError::InvalidInput(format!("'{arg}', expected heir=count")))?;
    let count = count.trim().parse::<u64>().map_err(|_| {
        EngineError::InvalidInput(format!("'{arg}', count must be a non-negative integer"))
    })?;
    Ok((name.trim().to_string(), count))
}

/// Parse a JSON object such as `{"husband": 1, "son": 2}`.
pub fn parse_counts_json(json: &str) -> Result<HeirCounts> {
    let raw: HashMap<String, u64> = serde_json::from_str(json)?;
    parse_counts(raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_counts() {
        let counts = parse_counts([("wife", 1), ("son", 2), ("son", 1)]).unwrap();
        assert_eq!(counts.get(HeirKey::Wife), 1);
        assert_eq!(counts.get(HeirKey::Son), 3);
    }

    #[test]
    fn test_unknown_heir_is_rejected() {
        let err = parse_counts([("cousin", 1)]).unwrap_err();
        assert!(matches!(err, EngineError::UnknownHeir(name) if name == "cousin"));
    }

    #[test]
    fn test_count_limit() {
        let err = parse_counts([("daughter", u64::from(MAX_HEIR_COUNT) + 1)]).unwrap_err();
        assert!(matches!(err, EngineError::CountTooLarge { .. }));
        assert!(parse_counts([("daughter", u64::from(MAX_HEIR_COUNT))]).is_ok());
    }

    #[test]
    fn test_spouse_conflict() {
        let err = parse_counts([("husband", 1), ("wife", 1)]).unwrap_err();
        assert!(matches!(err, EngineError::SpouseConflict));
        assert!(parse_counts([("husband", 1), ("wife", 0)]).is_ok());
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("full_brother=2").unwrap(),
            ("full_brother".to_string(), 2)
        );
        assert!(matches!(
            parse_assignment("son"),
            Err(EngineError::InvalidInput(_))
        ));
        assert!(parse_assignment("son=-1").is_err());
    }

    #[test]
    fn test_parse_counts_json() {
        let counts = parse_counts_json(r#"{"husband": 1, "son": 1}"#).unwrap();
        assert_eq!(counts.get(HeirKey::Husband), 1);
        assert_eq!(counts.get(HeirKey::Son), 1);

        assert!(matches!(
            parse_counts_json("{\"son\": -1}"),
            Err(EngineError::JsonError(_))
        ));
    }
}
