//! WASM bindings for the Ferâiz engine
//!
//! Feature-gated behind the `wasm` feature flag. Lets a browser or mobile
//! front end run the calculation locally, with the same validation as the CLI.
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { WasmCalculator } from 'feraiz-engine';
//!
//! await init();
//! const calculator = new WasmCalculator();
//!
//! const report = calculator.calculate({ wife: 1, father: 1, mother: 1 });
//! for (const row of report.rows) {
//!     console.log(row.name, row.share, row.percentage.toFixed(2));
//! }
//! console.log(report.log.map(e => e.message));
//! ```

use serde::Serialize;
use std::collections::HashMap;
use wasm_bindgen::prelude::*;

use crate::engine::calculate;
use crate::error::EngineError;
use crate::input::parse_counts;
use crate::report::DistributionReport;
use crate::types::HeirKey;

/// Helper to create consistent error JsValues
fn wasm_error(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        wasm_error(&err.to_string())
    }
}

/// Serializable heir entry for `heirs()`
#[derive(Serialize)]
struct WasmHeirInfo {
    key: &'static str,
    name: &'static str,
}

/// WASM-compatible calculator.
#[wasm_bindgen]
pub struct WasmCalculator;

#[wasm_bindgen]
impl WasmCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self
    }

    /// Calculate the shares for an object of heir counts, e.g. `{ son: 2 }`.
    ///
    /// # Returns
    /// * `Ok(JsValue)` - The distribution report (rows, total, log)
    /// * `Err(JsValue)` - Validation or arithmetic error message
    pub fn calculate(&self, counts: JsValue) -> Result<JsValue, JsValue> {
        let raw: HashMap<String, u64> = serde_wasm_bindgen::from_value(counts)
            .map_err(|e| wasm_error(&format!("Invalid heir counts: {e}")))?;

        let counts = parse_counts(raw)?;
        let result = calculate(&counts)?;
        let report = DistributionReport::new(&counts, &result)?;

        serde_wasm_bindgen::to_value(&report)
            .map_err(|e| wasm_error(&format!("Serialization failed: {e}")))
    }

    /// All heir identifiers with their display names, in registry order.
    pub fn heirs(&self) -> Result<JsValue, JsValue> {
        let heirs: Vec<WasmHeirInfo> = HeirKey::ALL
            .iter()
            .map(|k| WasmHeirInfo {
                key: k.as_str(),
                name: k.name(),
            })
            .collect();
        serde_wasm_bindgen::to_value(&heirs)
            .map_err(|e| wasm_error(&format!("Serialization failed: {e}")))
    }

    /// Get the engine version.
    pub fn version(&self) -> String {
        crate::VERSION.to_string()
    }
}

impl Default for WasmCalculator {
    fn default() -> Self {
        Self::new()
    }
}
