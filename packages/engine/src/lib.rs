//! Ferâiz Engine
//!
//! Exact inheritance shares under the Hanafi rules as taught in the
//! Sirâciyye. Given the number of heirs in each category, the engine computes
//! the fraction of the estate owed to every category together with a
//! reasoning log that explains each step:
//! - Blocking (hacb) of farther heirs by nearer ones
//! - Fixed Quranic shares (ferâiz) for the spouse, parents and daughters
//! - Proportional scale-down (avl) when the fixed shares exceed the estate
//! - Residuary distribution (asabe) and return (radd) of any remainder
//!
//! All arithmetic is exact ([`Fraction`]).
//!
//! # Example
//!
//! ```ignore
//! use feraiz_engine::{calculate, HeirCounts, HeirKey};
//!
//! let counts = HeirCounts::new()
//!     .with(HeirKey::Wife, 1)
//!     .with(HeirKey::Father, 1)
//!     .with(HeirKey::Mother, 1);
//! counts.check_spouses()?;
//!
//! let result = calculate(&counts)?;
//! for (heir, share) in result.shares().iter() {
//!     println!("{heir}: {share}");
//! }
//! ```

pub mod adjustment;
pub mod blocking;
pub mod config;
pub mod engine;
pub mod error;
pub mod fixed_shares;
pub mod fraction;
pub mod input;
pub mod remainder_return;
pub mod report;
pub mod residuary;
pub mod trace;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
pub use engine::{calculate, CalculationResult};
pub use error::{EngineError, Result};
pub use fraction::Fraction;
pub use input::{parse_counts, parse_counts_json};
pub use report::{DistributionReport, ShareRow};
pub use trace::{LogEntry, ReasoningLog, Stage};
pub use types::{HeirCounts, HeirKey, ShareMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
