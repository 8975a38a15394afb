//! Shared helpers for step definitions

pub mod heir_table;
