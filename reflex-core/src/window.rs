use std::collections::VecDeque;

use crate::trial::Trial;

/// Bounded FIFO of the most recent trials, insertion order = chronological
/// order. Pushing beyond capacity evicts from the front.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    capacity: usize,
    trials: VecDeque<Trial>,
}

impl SampleWindow {
    /// Capacity below 1 is clamped to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            trials: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a trial, evicting the oldest entries once full. Always valid.
    pub fn push(&mut self, trial: Trial) {
        while self.trials.len() >= self.capacity {
            let _ = self.trials.pop_front();
        }
        self.trials.push_back(trial);
    }

    /// Read-only chronological view for display and statistics.
    pub fn iter(&self) -> impl Iterator<Item = &Trial> {
        self.trials.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Trial> {
        self.trials.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
