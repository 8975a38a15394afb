//! Conversion of Gherkin heir tables
//!
//! ```text
//! | heir     | count |
//! | husband  | 1     |
//! | daughter | 2     |
//! ```

/// Read `(heir, count)` pairs from a table, skipping the header row.
///
/// Identifiers are passed through unchanged so that unknown heirs reach the
/// engine's own validation.
pub fn parse_heir_table(table: &cucumber::gherkin::Table) -> Vec<(String, u64)> {
    table
        .rows
        .iter()
        .skip(1)
        .filter(|row| row.len() >= 2)
        .map(|row| {
            let count = row[1]
                .trim()
                .parse::<u64>()
                .unwrap_or_else(|_| panic!("Invalid count for {}: {}", row[0], row[1]));
            (row[0].trim().to_string(), count)
        })
        .collect()
}
