use rand::Rng;
use reflex_core::{BucketThresholds, EventKind, SampleWindow, TimelineEvent, TimelineLog, Trial};
use reflex_timing::TimeMs;
use tracing::debug;

use crate::config::TrainerConfig;
use crate::reaction::ReactionTracker;
use crate::stats::{SessionStats, SessionSummary};

/// Determines which timeout a target runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Peripheral,
    Center,
}

/// The current stimulus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub position: (f32, f32),
    pub spawn_time: TimeMs,
    pub timeout_ms: u64,
    pub mode: TargetMode,
}

impl Target {
    fn elapsed_ms(&self, now: TimeMs) -> u64 {
        now.since(self.spawn_time)
    }
}

#[derive(Debug, Clone, Copy)]
struct Cooldown {
    start: TimeMs,
    duration_ms: u64,
}

impl Cooldown {
    fn elapsed(&self, now: TimeMs) -> bool {
        now.since(self.start) >= self.duration_ms
    }
}

/// Externally observable lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Idle,
    Active,
    Cooldown,
}

/// State changes surfaced to the host per call.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainerEvent {
    TargetSpawned {
        position: (f32, f32),
        timeout_ms: u64,
    },
    Hit(Trial),
    Miss(Trial),
    OffTargetHit,
    FirstMove {
        latency_ms: f64,
    },
}

/// Owned trainer state advanced by the host loop.
///
/// The host reads its clock once per frame and passes the same `now` to
/// `on_motion`, `on_response`, and finally `tick`. Response before tick is
/// what makes a hit on the exact deadline frame count as a hit.
pub struct TrainerState<R: Rng> {
    config: TrainerConfig,
    rng: R,
    target: Option<Target>,
    cooldown: Option<Cooldown>,
    window: SampleWindow,
    timeline: TimelineLog,
    reaction: ReactionTracker,
    stats: SessionStats,
    last_trial: Option<Trial>,
}

impl<R: Rng> TrainerState<R> {
    pub fn new(config: TrainerConfig, rng: R) -> Self {
        let config = config.sanitize();
        let window = SampleWindow::new(config.window_capacity);
        let timeline = TimelineLog::new(config.timeline_window_ms);
        let reaction = ReactionTracker::new(config.window_capacity);
        Self {
            config,
            rng,
            target: None,
            cooldown: None,
            window,
            timeline,
            reaction,
            stats: SessionStats::default(),
            last_trial: None,
        }
    }

    /// Advances the lifecycle one frame: resolves a timed-out target, or
    /// spawns once the cooldown has elapsed. Ticking twice with the same
    /// `now` produces no duplicate transitions.
    pub fn tick(&mut self, now: TimeMs) -> Vec<TrainerEvent> {
        let mut events = Vec::new();
        if let Some(target) = self.target {
            if target.elapsed_ms(now) >= target.timeout_ms {
                self.resolve_timeout(target, now, &mut events);
            }
            return events;
        }
        match self.cooldown {
            Some(cooldown) if !cooldown.elapsed(now) => {}
            _ => self.spawn(now, &mut events),
        }
        events
    }

    /// Handles a click/fire at `position`. Only an active target can
    /// resolve; anything else is an off-target hit. The deadline is not
    /// consulted here, so a response racing a timeout in the same frame
    /// wins.
    pub fn on_response(&mut self, position: (f32, f32), now: TimeMs) -> Vec<TrainerEvent> {
        let mut events = Vec::new();
        self.stats.record_shot();
        let Some(target) = self.target else {
            self.record_off_target(now, &mut events);
            return events;
        };

        let dx = position.0 - target.position.0;
        let dy = position.1 - target.position.1;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= self.config.target_radius {
            let trial = Trial::hit(target.elapsed_ms(now) as f64);
            debug!(latency_ms = trial.latency_ms, "hit");
            self.window.push(trial);
            self.last_trial = Some(trial);
            self.timeline.push(now, EventKind::Hit, None);
            self.stats.record_hit(trial.latency_ms);
            self.target = None;
            self.reaction.on_stimulus_cleared();
            self.begin_cooldown(now);
            events.push(TrainerEvent::Hit(trial));
        } else {
            // A miss-click does not resolve the target.
            self.record_off_target(now, &mut events);
        }
        events
    }

    /// Feeds one aim-motion delta. The first non-zero delta per stimulus
    /// records the orientation reaction time.
    pub fn on_motion(&mut self, dx: f32, dy: f32, now: TimeMs) -> Vec<TrainerEvent> {
        let mut events = Vec::new();
        if self.target.is_some() {
            if let Some(latency_ms) = self.reaction.on_motion(dx, dy, now) {
                debug!(latency_ms, "first move");
                self.timeline.push(now, EventKind::FirstMove, None);
                self.stats.record_first_move(latency_ms);
                events.push(TrainerEvent::FirstMove { latency_ms });
            }
        }
        events
    }

    fn spawn(&mut self, now: TimeMs, events: &mut Vec<TrainerEvent>) {
        self.cooldown = None;
        let mode = if self.rng.random_bool(self.config.center_probability) {
            TargetMode::Center
        } else {
            TargetMode::Peripheral
        };
        let (position, timeout_ms) = match mode {
            TargetMode::Center => (self.config.arena.center(), self.config.center_timeout_ms),
            TargetMode::Peripheral => (
                self.config.spawn.sample(
                    &self.config.arena,
                    self.config.target_radius,
                    &mut self.rng,
                ),
                self.config.timeout_ms,
            ),
        };
        let target = Target {
            position,
            spawn_time: now,
            timeout_ms,
            mode,
        };
        debug!(x = position.0, y = position.1, timeout_ms, "target spawned");
        self.timeline
            .push(now, EventKind::TargetActive, Some(timeout_ms as f64));
        self.reaction.on_stimulus(now);
        self.target = Some(target);
        events.push(TrainerEvent::TargetSpawned {
            position,
            timeout_ms,
        });
    }

    fn resolve_timeout(&mut self, target: Target, now: TimeMs, events: &mut Vec<TrainerEvent>) {
        let trial = Trial::miss(target.timeout_ms as f64);
        debug!(timeout_ms = target.timeout_ms, "target timed out");
        self.window.push(trial);
        self.last_trial = Some(trial);
        self.timeline.push(now, EventKind::Miss, None);
        self.stats.record_miss();
        self.target = None;
        self.reaction.on_stimulus_cleared();
        self.begin_cooldown(now);
        events.push(TrainerEvent::Miss(trial));
    }

    fn begin_cooldown(&mut self, now: TimeMs) {
        let (lo, hi) = self.config.cooldown_range_ms;
        let duration_ms = if lo >= hi {
            lo
        } else {
            self.rng.random_range(lo..=hi)
        };
        self.cooldown = Some(Cooldown {
            start: now,
            duration_ms,
        });
    }

    fn record_off_target(&mut self, now: TimeMs, events: &mut Vec<TrainerEvent>) {
        debug!("off-target hit");
        self.timeline.push(now, EventKind::OffTargetHit, None);
        self.stats.record_off_target();
        events.push(TrainerEvent::OffTargetHit);
    }

    #[must_use]
    pub fn current_target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> LifecyclePhase {
        if self.target.is_some() {
            LifecyclePhase::Active
        } else if self.cooldown.is_some() {
            LifecyclePhase::Cooldown
        } else {
            LifecyclePhase::Idle
        }
    }

    /// Read-only chronological trial history for histogram rendering.
    #[must_use]
    pub fn sample_window(&self) -> &SampleWindow {
        &self.window
    }

    /// Timeline events within the trailing display window ending at `now`.
    pub fn timeline_snapshot(&self, now: TimeMs) -> impl Iterator<Item = &TimelineEvent> {
        self.timeline.snapshot(now)
    }

    /// Most recently resolved trial, for the big-number readout.
    #[must_use]
    pub fn last_trial(&self) -> Option<Trial> {
        self.last_trial
    }

    /// Bounded window of first-move latencies.
    pub fn move_window(&self) -> impl Iterator<Item = f64> + '_ {
        self.reaction.latencies()
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.stats.summary()
    }

    #[must_use]
    pub fn thresholds(&self) -> BucketThresholds {
        self.config.thresholds()
    }

    #[must_use]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}
