//! telemetry/counters.rs
//! Deterministic counters kept by each padding instance.
//!
//! Summary: how many blocks were encoded and verified, and how much message
//! input was absorbed.
//!
//! Security notes:
//! - Rejections are counted, never classified. Recording which check failed
//!   would turn the counters into a verification oracle.
use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddingCounters {
    pub encodings: u64,
    pub verifications: u64,
    pub accepted: u64,
    pub rejected: u64,
    pub bytes_absorbed: u64,
    pub bytes_encoded: u64,
}

impl PaddingCounters {
    /// Record one produced block of `em_len` bytes.
    pub fn record_encoding(&mut self, em_len: usize) {
        self.encodings += 1;
        self.bytes_encoded += em_len as u64;
    }

    /// Record one verification outcome.
    pub fn record_verification(&mut self, accepted: bool) {
        self.verifications += 1;
        if accepted {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }

    /// Record message (or raw digest) bytes fed through `update`.
    pub fn add_absorbed(&mut self, len: usize) {
        self.bytes_absorbed += len as u64;
    }

    // Per-instance counters, merged by the caller; no atomics or locks.
    pub fn merge(&mut self, other: &PaddingCounters) {
        self.encodings += other.encodings;
        self.verifications += other.verifications;
        self.accepted += other.accepted;
        self.rejected += other.rejected;
        self.bytes_absorbed += other.bytes_absorbed;
        self.bytes_encoded += other.bytes_encoded;
    }

    /// Serialize as a JSON object for log sinks or dashboards.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
