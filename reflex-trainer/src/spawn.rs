use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::Arena;

/// Where the next target appears. Each variant of the original trainer
/// hard-coded one of these; here they are configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Uniform inside a square of `size` px centred in the arena, clamped so
    /// the whole target circle stays inside. `size = 0` pins the centre.
    CenteredRegion { size: f32 },
    /// Centre ± a uniformly chosen horizontal offset, y pinned to centre.
    HorizontalOffsets { offsets: Vec<f32> },
    /// Uniform angle at a fixed distance from centre.
    Ring { distance: f32 },
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::CenteredRegion { size: 0.0 }
    }
}

impl SpawnPolicy {
    /// Samples a spawn position. Degenerate configuration falls back to the
    /// arena centre rather than failing.
    pub fn sample<R: Rng + ?Sized>(&self, arena: &Arena, radius: f32, rng: &mut R) -> (f32, f32) {
        let (cx, cy) = arena.center();
        match self {
            SpawnPolicy::CenteredRegion { size } => {
                let half = size.max(0.0) * 0.5;
                let x = sample_axis(cx, half, radius, arena.width, rng);
                let y = sample_axis(cy, half, radius, arena.height, rng);
                (x, y)
            }
            SpawnPolicy::HorizontalOffsets { offsets } => {
                if offsets.is_empty() {
                    (cx, cy)
                } else {
                    let offset = offsets[rng.random_range(0..offsets.len())];
                    (cx + offset, cy)
                }
            }
            SpawnPolicy::Ring { distance } => {
                let angle = rng.random_range(0.0..std::f32::consts::TAU);
                (cx + distance * angle.cos(), cy + distance * angle.sin())
            }
        }
    }
}

fn sample_axis<R: Rng + ?Sized>(
    center: f32,
    half: f32,
    radius: f32,
    extent: f32,
    rng: &mut R,
) -> f32 {
    let lo = (center - half).max(radius);
    let hi = (center + half).min(extent - radius);
    if lo <= hi {
        rng.random_range(lo..=hi)
    } else {
        center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn zero_size_region_pins_the_centre() {
        let arena = Arena::new(1000.0, 1000.0);
        let policy = SpawnPolicy::CenteredRegion { size: 0.0 };
        assert_eq!(policy.sample(&arena, 20.0, &mut rng()), (500.0, 500.0));
    }

    #[test]
    fn region_samples_stay_clamped_inside_the_arena() {
        let arena = Arena::new(200.0, 200.0);
        let policy = SpawnPolicy::CenteredRegion { size: 5_000.0 };
        let mut rng = rng();
        for _ in 0..200 {
            let (x, y) = policy.sample(&arena, 10.0, &mut rng);
            assert!((10.0..=190.0).contains(&x));
            assert!((10.0..=190.0).contains(&y));
        }
    }

    #[test]
    fn degenerate_region_falls_back_to_the_centre() {
        // Radius larger than the arena inverts the clamp bounds.
        let arena = Arena::new(30.0, 30.0);
        let policy = SpawnPolicy::CenteredRegion { size: 100.0 };
        assert_eq!(policy.sample(&arena, 40.0, &mut rng()), (15.0, 15.0));
    }

    #[test]
    fn horizontal_offsets_pick_a_configured_column() {
        let arena = Arena::new(1280.0, 720.0);
        let policy = SpawnPolicy::HorizontalOffsets {
            offsets: vec![300.0, -300.0],
        };
        let mut rng = rng();
        for _ in 0..50 {
            let (x, y) = policy.sample(&arena, 5.0, &mut rng);
            assert!(x == 940.0 || x == 340.0);
            assert_eq!(y, 360.0);
        }
    }

    #[test]
    fn empty_offset_list_falls_back_to_the_centre() {
        let arena = Arena::new(1280.0, 720.0);
        let policy = SpawnPolicy::HorizontalOffsets { offsets: vec![] };
        assert_eq!(policy.sample(&arena, 5.0, &mut rng()), (640.0, 360.0));
    }

    #[test]
    fn ring_samples_sit_at_the_configured_distance() {
        let arena = Arena::new(1000.0, 1000.0);
        let policy = SpawnPolicy::Ring { distance: 250.0 };
        let mut rng = rng();
        for _ in 0..50 {
            let (x, y) = policy.sample(&arena, 5.0, &mut rng);
            let d = ((x - 500.0).powi(2) + (y - 500.0).powi(2)).sqrt();
            assert!((d - 250.0).abs() < 0.1, "distance {d}");
        }
    }
}
