use serde::Serialize;

/// Running tallies for the current session.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SessionStats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub off_target_hits: u32,
    pub first_moves: u32,
    hit_latency_sum_ms: f64,
    move_latency_sum_ms: f64,
}

impl SessionStats {
    pub fn record_shot(&mut self) {
        self.shots += 1;
    }

    pub fn record_hit(&mut self, latency_ms: f64) {
        self.hits += 1;
        self.hit_latency_sum_ms += latency_ms;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_off_target(&mut self) {
        self.off_target_hits += 1;
    }

    pub fn record_first_move(&mut self, latency_ms: f64) {
        self.first_moves += 1;
        self.move_latency_sum_ms += latency_ms;
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        let resolved = self.hits + self.misses;
        SessionSummary {
            trials: resolved,
            hits: self.hits,
            misses: self.misses,
            off_target_hits: self.off_target_hits,
            shot_accuracy: ratio(self.hits, self.shots),
            target_accuracy: ratio(self.hits, resolved),
            avg_hit_latency_ms: mean(self.hit_latency_sum_ms, self.hits),
            avg_first_move_ms: mean(self.move_latency_sum_ms, self.first_moves),
        }
    }
}

/// End-of-session readout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SessionSummary {
    pub trials: u32,
    pub hits: u32,
    pub misses: u32,
    pub off_target_hits: u32,
    /// Hits per response delivered.
    pub shot_accuracy: f64,
    /// Hits per resolved target.
    pub target_accuracy: f64,
    pub avg_hit_latency_ms: Option<f64>,
    pub avg_first_move_ms: Option<f64>,
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}

fn mean(sum: f64, count: u32) -> Option<f64> {
    if count == 0 {
        None
    } else {
        Some(sum / f64::from(count))
    }
}
