use serde::{Deserialize, Serialize};

/// How a target encounter ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Response landed inside the target radius before the deadline.
    Hit,
    /// Target timed out with no resolving response.
    Miss,
    /// Response fired with no active target, or outside the hit radius.
    OffTargetHit,
}

/// One resolved target encounter. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub latency_ms: f64,
    pub outcome: Outcome,
}

impl Trial {
    #[must_use]
    pub fn hit(latency_ms: f64) -> Self {
        Self {
            latency_ms,
            outcome: Outcome::Hit,
        }
    }

    /// A timeout records the timeout value itself as the latency.
    #[must_use]
    pub fn miss(timeout_ms: f64) -> Self {
        Self {
            latency_ms: timeout_ms,
            outcome: Outcome::Miss,
        }
    }

    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.outcome == Outcome::Miss
    }
}
