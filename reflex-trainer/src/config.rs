use reflex_core::BucketThresholds;
use serde::{Deserialize, Serialize};

use crate::spawn::SpawnPolicy;

/// Logical screen-space the core spawns into. The host maps real display
/// coordinates onto this before they reach the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Tunables the original per-variant scripts duplicated, consolidated into
/// one struct. All durations are integer milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub window_capacity: usize,
    /// Deadline for peripheral targets.
    pub timeout_ms: u64,
    /// Deadline for center-mode targets.
    pub center_timeout_ms: u64,
    pub fast_threshold_ms: u64,
    /// Cooldown duration is drawn uniformly from this inclusive range.
    pub cooldown_range_ms: (u64, u64),
    pub target_radius: f32,
    pub spawn: SpawnPolicy,
    /// Chance the next target spawns in center mode.
    pub center_probability: f64,
    pub timeline_window_ms: u64,
    /// Ascending upper edges for the latency histogram.
    pub histogram_edges_ms: Vec<f64>,
    pub arena: Arena,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            window_capacity: 20,
            timeout_ms: 350,
            center_timeout_ms: 350,
            fast_threshold_ms: 160,
            cooldown_range_ms: (1_000, 2_000),
            target_radius: 20.0,
            spawn: SpawnPolicy::default(),
            center_probability: 0.0,
            timeline_window_ms: 20_000,
            histogram_edges_ms: vec![
                100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0, 600.0, 750.0,
                1000.0,
            ],
            arena: Arena::default(),
        }
    }
}

impl TrainerConfig {
    /// Clamps every numeric field into a valid positive range. Out-of-range
    /// input is silently corrected, never rejected.
    #[must_use]
    pub fn sanitize(mut self) -> Self {
        self.window_capacity = self.window_capacity.max(1);
        self.timeout_ms = self.timeout_ms.max(1);
        self.center_timeout_ms = self.center_timeout_ms.max(1);
        self.fast_threshold_ms = self.fast_threshold_ms.max(1);
        if self.cooldown_range_ms.0 > self.cooldown_range_ms.1 {
            self.cooldown_range_ms = (self.cooldown_range_ms.1, self.cooldown_range_ms.0);
        }
        self.target_radius = if self.target_radius.is_finite() {
            self.target_radius.max(1.0)
        } else {
            1.0
        };
        self.center_probability = if self.center_probability.is_finite() {
            self.center_probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.timeline_window_ms = self.timeline_window_ms.max(1);
        self.histogram_edges_ms.retain(|edge| edge.is_finite() && *edge > 0.0);
        self.histogram_edges_ms.sort_by(f64::total_cmp);
        self.arena.width = if self.arena.width.is_finite() {
            self.arena.width.max(1.0)
        } else {
            Arena::default().width
        };
        self.arena.height = if self.arena.height.is_finite() {
            self.arena.height.max(1.0)
        } else {
            Arena::default().height
        };
        self
    }

    /// Classification thresholds for this variant's peripheral targets.
    #[must_use]
    pub fn thresholds(&self) -> BucketThresholds {
        BucketThresholds::new(self.fast_threshold_ms as f64, self.timeout_ms as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_degenerate_numbers() {
        let config = TrainerConfig {
            window_capacity: 0,
            timeout_ms: 0,
            cooldown_range_ms: (2_000, 500),
            target_radius: -4.0,
            center_probability: 3.5,
            histogram_edges_ms: vec![300.0, -10.0, 100.0],
            arena: Arena::new(0.0, -100.0),
            ..TrainerConfig::default()
        }
        .sanitize();

        assert_eq!(config.window_capacity, 1);
        assert_eq!(config.timeout_ms, 1);
        assert_eq!(config.cooldown_range_ms, (500, 2_000));
        assert_eq!(config.target_radius, 1.0);
        assert_eq!(config.center_probability, 1.0);
        assert_eq!(config.histogram_edges_ms, vec![100.0, 300.0]);
        assert_eq!(config.arena.width, 1.0);
        assert_eq!(config.arena.height, 1.0);
    }

    #[test]
    fn default_config_survives_a_serde_round_trip() {
        let config = TrainerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: TrainerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: TrainerConfig =
            serde_json::from_str(r#"{"timeout_ms": 250, "fast_threshold_ms": 100}"#).unwrap();
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.fast_threshold_ms, 100);
        assert_eq!(config.window_capacity, 20);
    }
}
