//! telemetry/mod.rs
//! Per-instance padding counters.

pub mod counters;

pub use counters::*;
