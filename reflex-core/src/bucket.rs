use serde::{Deserialize, Serialize};

use crate::trial::Outcome;

/// Latency classification used for color-coding and the big-number readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bucket {
    Fast,
    Medium,
    /// Latency exceeded the nominal timeout but was still accepted, e.g.
    /// grace-period variants.
    Slow,
    Missed,
}

/// Per-variant classification thresholds; never constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketThresholds {
    pub fast_ms: f64,
    pub timeout_ms: f64,
}

impl BucketThresholds {
    #[must_use]
    pub fn new(fast_ms: f64, timeout_ms: f64) -> Self {
        Self { fast_ms, timeout_ms }
    }

    /// A miss is `Missed` regardless of the latency value.
    #[must_use]
    pub fn classify(&self, latency_ms: f64, outcome: Outcome) -> Bucket {
        if outcome == Outcome::Miss {
            return Bucket::Missed;
        }
        if latency_ms <= self.fast_ms {
            Bucket::Fast
        } else if latency_ms <= self.timeout_ms {
            Bucket::Medium
        } else {
            Bucket::Slow
        }
    }
}

/// Index of the first edge `>= latency_ms` in an ascending edge list, or
/// `edges.len()` as the overflow bin.
#[must_use]
pub fn bucket_index(latency_ms: f64, edges: &[f64]) -> usize {
    edges
        .iter()
        .position(|edge| *edge >= latency_ms)
        .unwrap_or(edges.len())
}
