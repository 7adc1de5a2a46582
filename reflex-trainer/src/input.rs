use serde::{Deserialize, Serialize};

use crate::config::Arena;

const REFERENCE_EDPI: f64 = 640.0;
const DPI_STEP: u32 = 50;
const MIN_DPI: u32 = 50;
const SENS_STEP_FINE: f64 = 0.005;
const SENS_STEP_COARSE: f64 = 0.05;
const MIN_SENS: f64 = 0.001;

/// Host-side input mapping: DPI × in-game sensitivity relative to a
/// reference eDPI. The core never sees this — it only receives final aim
/// positions. Adjustments clamp silently; they are never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    dpi: u32,
    game_sens: f64,
}

impl Sensitivity {
    #[must_use]
    pub fn new(dpi: u32, game_sens: f64) -> Self {
        Self {
            dpi: dpi.max(MIN_DPI),
            game_sens: game_sens.max(MIN_SENS),
        }
    }

    /// Scale applied to raw device deltas.
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        f64::from(self.dpi) * self.game_sens / REFERENCE_EDPI
    }

    pub fn adjust_dpi(&mut self, steps: i32) {
        let delta = i64::from(steps) * i64::from(DPI_STEP);
        let dpi = i64::from(self.dpi) + delta;
        self.dpi = dpi.clamp(i64::from(MIN_DPI), i64::from(u32::MAX)) as u32;
    }

    pub fn adjust_sens(&mut self, steps: i32, coarse: bool) {
        let step = if coarse { SENS_STEP_COARSE } else { SENS_STEP_FINE };
        self.game_sens = (self.game_sens + f64::from(steps) * step).max(MIN_SENS);
    }

    #[must_use]
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    #[must_use]
    pub fn game_sens(&self) -> f64 {
        self.game_sens
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::new(1_600, 0.4)
    }
}

/// Aim position integrated from scaled deltas, clamped to the arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    x: f32,
    y: f32,
}

impl Cursor {
    #[must_use]
    pub fn centered(arena: &Arena) -> Self {
        let (x, y) = arena.center();
        Self { x, y }
    }

    pub fn apply_delta(&mut self, dx: f32, dy: f32, sensitivity: &Sensitivity, arena: &Arena) {
        let multiplier = sensitivity.multiplier() as f32;
        self.x = (self.x + dx * multiplier).clamp(0.0, arena.width - 1.0);
        self.y = (self.y + dy * multiplier).clamp(0.0, arena.height - 1.0);
    }

    #[must_use]
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}
