//! Configuration constants for the Ferâiz engine
//!
//! Centralized values used by the residuary split and by the input layers
//! (CLI, WASM) that validate heir counts before calling the engine.
//!
//! These are compile-time constants. The library itself reads no environment
//! variables or configuration files.

/// Units a male residuary heir receives in a weighted split.
pub const MALE_UNITS: i64 = 2;

/// Units a female residuary heir receives in a weighted split.
pub const FEMALE_UNITS: i64 = 1;

/// Maximum count accepted for a single heir category.
///
/// The engine itself trusts its input; this bound is enforced by the input
/// layers. It keeps every intermediate product of the exact arithmetic well
/// inside 64 bits (weighted splits multiply counts into denominators).
pub const MAX_HEIR_COUNT: u32 = 10_000;
