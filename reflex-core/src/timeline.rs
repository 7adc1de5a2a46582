use std::collections::VecDeque;

use reflex_timing::TimeMs;

/// What a timeline entry marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    TargetActive,
    Hit,
    Miss,
    OffTargetHit,
    FirstMove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineEvent {
    pub at: TimeMs,
    pub kind: EventKind,
    /// Nominal duration for span-like entries (`TargetActive` carries the
    /// timeout it was spawned with); point events carry none.
    pub nominal_ms: Option<f64>,
}

/// Append-only event log pruned to a trailing time window on every insert.
#[derive(Debug, Clone)]
pub struct TimelineLog {
    window_ms: u64,
    events: VecDeque<TimelineEvent>,
}

impl TimelineLog {
    #[must_use]
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            events: VecDeque::new(),
        }
    }

    pub fn push(&mut self, now: TimeMs, kind: EventKind, nominal_ms: Option<f64>) {
        let cutoff = now.as_millis().saturating_sub(self.window_ms);
        while self
            .events
            .front()
            .is_some_and(|event| event.at.as_millis() < cutoff)
        {
            let _ = self.events.pop_front();
        }
        self.events.push_back(TimelineEvent {
            at: now,
            kind,
            nominal_ms,
        });
    }

    /// Events within the trailing window ending at `now`, oldest first.
    /// Does not mutate the log.
    pub fn snapshot(&self, now: TimeMs) -> impl Iterator<Item = &TimelineEvent> {
        let cutoff = now.as_millis().saturating_sub(self.window_ms);
        self.events
            .iter()
            .filter(move |event| event.at.as_millis() >= cutoff)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}
