use std::ops::{Add, AddAssign, Sub};

/// Monotonic timestamp in whole milliseconds since an arbitrary epoch.
///
/// All core timing math runs on integer milliseconds; fractional seconds
/// exist only at the host boundary where the clock is sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeMs(pub u64);

impl TimeMs {
    pub const ZERO: TimeMs = TimeMs(0);

    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs <= 0.0 {
            return TimeMs(0);
        }
        TimeMs((secs * 1000.0).round() as u64)
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    #[must_use]
    pub fn since(self, earlier: TimeMs) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl Add<u64> for TimeMs {
    type Output = TimeMs;

    fn add(self, millis: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(millis))
    }
}

impl AddAssign<u64> for TimeMs {
    fn add_assign(&mut self, millis: u64) {
        self.0 = self.0.saturating_add(millis);
    }
}

impl Sub for TimeMs {
    type Output = u64;

    fn sub(self, earlier: TimeMs) -> u64 {
        self.since(earlier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn since_saturates_on_reordered_timestamps() {
        assert_eq!(TimeMs(100).since(TimeMs(40)), 60);
        assert_eq!(TimeMs(40).since(TimeMs(100)), 0);
    }

    #[test]
    fn seconds_round_trip_at_millisecond_precision() {
        let t = TimeMs::from_secs_f64(0.350);
        assert_eq!(t.as_millis(), 350);
        assert_eq!(t.as_secs_f64(), 0.35);
        assert_eq!(TimeMs::from_secs_f64(-1.0), TimeMs::ZERO);
    }
}
