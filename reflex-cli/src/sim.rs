use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

use reflex_core::{bucket_index, Bucket, Outcome, Trial};
use reflex_timing::{Clock, ManualClock, TimeMs};
use reflex_trainer::{Cursor, Sensitivity, SessionSummary, TrainerConfig, TrainerEvent, TrainerState};

/// Synthetic player driving the trainer against a manual clock.
#[derive(Debug, Clone, Copy)]
pub struct PlayerProfile {
    /// First directional input lands this long after the spawn.
    pub move_delay_ms: (u64, u64),
    /// The click lands this long after the spawn.
    pub reaction_ms: (u64, u64),
    /// Chance the click is aimed at the target rather than beside it.
    pub accuracy: f64,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            move_delay_ms: (60, 140),
            reaction_ms: (140, 420),
            accuracy: 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct BucketCounts {
    pub fast: usize,
    pub medium: usize,
    pub slow: usize,
    pub missed: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub summary: SessionSummary,
    pub buckets: BucketCounts,
    /// Hit-latency counts per configured histogram edge, plus an overflow bin.
    pub histogram: Vec<usize>,
    pub trials: Vec<Trial>,
}

struct Plan {
    move_at: TimeMs,
    respond_at: TimeMs,
    aim: (f32, f32),
    moved: bool,
    responded: bool,
}

/// Runs a headless session of `target_trials` resolved targets and reports
/// the aggregate statistics. One millisecond per iteration; input is
/// delivered before the frame tick, so a response racing the deadline wins.
pub fn run_session(
    config: &TrainerConfig,
    profile: &PlayerProfile,
    seed: u64,
    target_trials: u32,
) -> SessionReport {
    let clock = ManualClock::new();
    let mut state = TrainerState::new(config.clone(), StdRng::seed_from_u64(seed));
    let config = state.config().clone();
    let mut player_rng = StdRng::seed_from_u64(seed.rotate_left(17) ^ 0x5851_F42D_4C95_7F2D);

    let sensitivity = Sensitivity::default();
    let mut cursor = Cursor::centered(&config.arena);
    let mut plan: Option<Plan> = None;
    let mut log: Vec<Trial> = Vec::new();

    // Hard stop so a pathological configuration cannot spin forever.
    let per_trial_ms =
        config.timeout_ms.max(config.center_timeout_ms) + config.cooldown_range_ms.1 + 1_000;
    let deadline_ms = (u64::from(target_trials) + 1) * per_trial_ms;

    while (log.len() as u32) < target_trials && clock.now().as_millis() < deadline_ms {
        let now = clock.now();
        let mut events = Vec::new();

        if let Some(p) = plan.as_mut() {
            if !p.moved && now >= p.move_at {
                p.moved = true;
                let (x, y) = cursor.position();
                let dx = (p.aim.0 - x).signum();
                let dy = (p.aim.1 - y).signum();
                events.extend(state.on_motion(dx, dy, now));
            }
            if !p.responded && now >= p.respond_at {
                p.responded = true;
                let (x, y) = cursor.position();
                let multiplier = sensitivity.multiplier() as f32;
                cursor.apply_delta(
                    (p.aim.0 - x) / multiplier,
                    (p.aim.1 - y) / multiplier,
                    &sensitivity,
                    &config.arena,
                );
                events.extend(state.on_response(cursor.position(), now));
            }
        }

        events.extend(state.tick(now));

        for event in &events {
            match event {
                TrainerEvent::TargetSpawned { position, .. } => {
                    let move_delay = player_rng
                        .random_range(profile.move_delay_ms.0..=profile.move_delay_ms.1);
                    let reaction =
                        player_rng.random_range(profile.reaction_ms.0..=profile.reaction_ms.1);
                    let aim = if player_rng.random_bool(profile.accuracy.clamp(0.0, 1.0)) {
                        *position
                    } else {
                        (position.0 + config.target_radius * 3.0, position.1)
                    };
                    let move_at = now + move_delay;
                    plan = Some(Plan {
                        move_at,
                        respond_at: (now + reaction).max(move_at),
                        aim,
                        moved: false,
                        responded: false,
                    });
                }
                TrainerEvent::Hit(trial) | TrainerEvent::Miss(trial) => {
                    log.push(*trial);
                    plan = None;
                }
                _ => {}
            }
        }

        clock.advance(1);
    }

    let thresholds = state.thresholds();
    let mut buckets = BucketCounts::default();
    let mut histogram = vec![0usize; config.histogram_edges_ms.len() + 1];
    for trial in &log {
        match thresholds.classify(trial.latency_ms, trial.outcome) {
            Bucket::Fast => buckets.fast += 1,
            Bucket::Medium => buckets.medium += 1,
            Bucket::Slow => buckets.slow += 1,
            Bucket::Missed => buckets.missed += 1,
        }
        if trial.outcome == Outcome::Hit {
            histogram[bucket_index(trial.latency_ms, &config.histogram_edges_ms)] += 1;
        }
    }

    let summary = state.summary();
    info!(
        trials = summary.trials,
        hits = summary.hits,
        misses = summary.misses,
        off_target = summary.off_target_hits,
        "session complete"
    );

    SessionReport {
        summary,
        buckets,
        histogram,
        trials: log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_session_resolves_the_requested_trials() {
        let config = TrainerConfig {
            cooldown_range_ms: (200, 300),
            ..TrainerConfig::default()
        };
        let profile = PlayerProfile {
            move_delay_ms: (50, 80),
            reaction_ms: (120, 200),
            accuracy: 1.0,
        };

        let report = run_session(&config, &profile, 7, 10);
        assert_eq!(report.trials.len(), 10);
        assert_eq!(report.summary.trials, 10);
        // Reaction range sits well under the 350 ms deadline.
        assert_eq!(report.summary.hits, 10);
        assert_eq!(report.histogram.iter().sum::<usize>(), 10);
    }

    #[test]
    fn a_player_slower_than_the_deadline_only_misses() {
        let profile = PlayerProfile {
            move_delay_ms: (50, 80),
            reaction_ms: (500, 600),
            accuracy: 1.0,
        };

        let report = run_session(&TrainerConfig::default(), &profile, 3, 5);
        assert_eq!(report.summary.misses, 5);
        assert_eq!(report.buckets.missed, 5);
        assert_eq!(report.summary.hits, 0);
    }
}
