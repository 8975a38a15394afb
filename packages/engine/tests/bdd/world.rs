//! World struct for Cucumber BDD tests
//!
//! Contains the test state that persists across steps in a scenario.

use cucumber::World;
use feraiz_engine::{calculate, parse_counts, CalculationResult, EngineError, Fraction, HeirCounts, HeirKey};

/// Test world that holds state across steps in a Cucumber scenario.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct FeraizWorld {
    /// Raw heir entries as given in the scenario, validated on execution
    pub entries: Vec<(String, u64)>,
    /// Validated counts of the last execution
    pub counts: HeirCounts,
    /// Last calculation result (if successful)
    pub result: Option<CalculationResult>,
    /// Last error (if validation or calculation failed)
    pub error: Option<EngineError>,
}

impl Default for FeraizWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl FeraizWorld {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            counts: HeirCounts::new(),
            result: None,
            error: None,
        }
    }

    /// Validate the entries, run the engine and store the result or error
    pub fn distribute(&mut self) {
        let outcome = parse_counts(self.entries.clone()).and_then(|counts| {
            self.counts = counts;
            calculate(&counts)
        });
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e);
            }
        }
    }

    /// The last successful result, failing the step otherwise
    pub fn result(&self) -> &CalculationResult {
        match &self.result {
            Some(result) => result,
            None => panic!(
                "Expected a successful calculation, got error: {:?}",
                self.error_message()
            ),
        }
    }

    /// Share of a heir by identifier
    pub fn share(&self, heir: &str) -> Option<Fraction> {
        let key: HeirKey = heir
            .parse()
            .unwrap_or_else(|e| panic!("Unknown heir in scenario: {e}"));
        self.result().shares().get(key)
    }

    /// Get error message if execution failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}
