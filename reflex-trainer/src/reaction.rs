use std::collections::VecDeque;

use reflex_timing::TimeMs;

/// Measures the latency from a stimulus to the first directional input.
///
/// This is the orientation reaction time, distinct from the hit latency:
/// both may be recorded for the same target. Only the first non-zero motion
/// after a stimulus counts; later motion is ignored until the next stimulus.
#[derive(Debug, Clone)]
pub struct ReactionTracker {
    capacity: usize,
    stimulus_time: Option<TimeMs>,
    responded: bool,
    latencies_ms: VecDeque<f64>,
    last_latency_ms: Option<f64>,
}

impl ReactionTracker {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            stimulus_time: None,
            responded: false,
            latencies_ms: VecDeque::with_capacity(capacity),
            last_latency_ms: None,
        }
    }

    /// Arms the tracker for a new stimulus.
    pub fn on_stimulus(&mut self, now: TimeMs) {
        self.stimulus_time = Some(now);
        self.responded = false;
    }

    /// Disarms when the stimulus goes away without counting a motion.
    pub fn on_stimulus_cleared(&mut self) {
        self.stimulus_time = None;
    }

    /// Feeds one motion delta; returns the first-move latency the first time
    /// a non-zero delta arrives while armed.
    pub fn on_motion(&mut self, dx: f32, dy: f32, now: TimeMs) -> Option<f64> {
        if self.responded || (dx == 0.0 && dy == 0.0) {
            return None;
        }
        let stimulus = self.stimulus_time?;
        self.responded = true;
        let latency_ms = now.since(stimulus) as f64;
        while self.latencies_ms.len() >= self.capacity {
            let _ = self.latencies_ms.pop_front();
        }
        self.latencies_ms.push_back(latency_ms);
        self.last_latency_ms = Some(latency_ms);
        Some(latency_ms)
    }

    /// Bounded window of recorded first-move latencies, oldest first.
    pub fn latencies(&self) -> impl Iterator<Item = f64> + '_ {
        self.latencies_ms.iter().copied()
    }

    #[must_use]
    pub fn last_latency_ms(&self) -> Option<f64> {
        self.last_latency_ms
    }

    #[must_use]
    pub fn has_responded(&self) -> bool {
        self.responded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_delta_motion_is_ignored() {
        let mut tracker = ReactionTracker::new(20);
        tracker.on_stimulus(TimeMs(1_000));
        assert_eq!(tracker.on_motion(0.0, 0.0, TimeMs(1_050)), None);
        assert_eq!(tracker.on_motion(2.0, 0.0, TimeMs(1_120)), Some(120.0));
    }

    #[test]
    fn only_the_first_motion_per_stimulus_counts() {
        let mut tracker = ReactionTracker::new(20);
        tracker.on_stimulus(TimeMs(0));
        assert_eq!(tracker.on_motion(1.0, 1.0, TimeMs(90)), Some(90.0));
        assert_eq!(tracker.on_motion(5.0, 0.0, TimeMs(95)), None);

        tracker.on_stimulus(TimeMs(2_000));
        assert_eq!(tracker.on_motion(-1.0, 0.0, TimeMs(2_140)), Some(140.0));
        assert_eq!(tracker.last_latency_ms(), Some(140.0));
    }

    #[test]
    fn motion_without_a_stimulus_records_nothing() {
        let mut tracker = ReactionTracker::new(20);
        assert_eq!(tracker.on_motion(3.0, 4.0, TimeMs(500)), None);

        tracker.on_stimulus(TimeMs(1_000));
        tracker.on_stimulus_cleared();
        assert_eq!(tracker.on_motion(3.0, 4.0, TimeMs(1_100)), None);
    }

    #[test]
    fn latency_window_is_bounded() {
        let mut tracker = ReactionTracker::new(2);
        for (t, latency) in [(0u64, 50u64), (1_000, 60), (2_000, 70)] {
            tracker.on_stimulus(TimeMs(t));
            tracker.on_motion(1.0, 0.0, TimeMs(t + latency));
        }
        let window: Vec<f64> = tracker.latencies().collect();
        assert_eq!(window, vec![60.0, 70.0]);
    }
}
