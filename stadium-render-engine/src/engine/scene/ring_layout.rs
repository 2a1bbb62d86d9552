use bevy::prelude::*;
use constants::layout::{FIELD_MIN_RADIUS, FIELD_RADIUS, FIELDER_COUNT, FIELDER_MIN_SPACING};
use rand::Rng;
use std::f32::consts::TAU;

use crate::error::SceneError;

/// Randomised but evenly spread positions on an annulus in the XZ plane.
///
/// The circle is split into `count` equal sectors. Each point sits at its
/// sector's nominal angle plus a jitter of at most `jitter_bound()`, which is
/// sized so neighbouring points stay at least `min_spacing` radians apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub count: usize,
    pub min_radius: f32,
    pub field_radius: f32,
    /// Minimum angular distance between neighbours, radians.
    pub min_spacing: f32,
    /// Rotate the whole pattern by a random phase on each call.
    pub random_phase: bool,
}

impl RingLayout {
    pub fn fielders() -> Self {
        Self {
            count: FIELDER_COUNT,
            min_radius: FIELD_MIN_RADIUS,
            field_radius: FIELD_RADIUS,
            min_spacing: FIELDER_MIN_SPACING,
            random_phase: true,
        }
    }

    pub fn sector_width(&self) -> f32 {
        TAU / self.count.max(1) as f32
    }

    /// Largest angular offset from a sector's nominal angle.
    pub fn jitter_bound(&self) -> f32 {
        let step = self.sector_width();
        ((step - self.min_spacing) / 2.0).clamp(0.0, step / 2.0)
    }

    fn validate(&self) -> Result<(), SceneError> {
        let radii_ok = self.min_radius.is_finite()
            && self.field_radius.is_finite()
            && self.min_radius >= 0.0
            && self.min_radius <= self.field_radius;
        if !radii_ok {
            return Err(SceneError::InvalidRadii {
                min: self.min_radius,
                max: self.field_radius,
            });
        }
        if self.count > 0 && self.min_spacing > self.sector_width() {
            return Err(SceneError::RingTooCrowded {
                count: self.count,
                min_spacing: self.min_spacing,
            });
        }
        Ok(())
    }

    /// Generate `count` positions at y = 0.
    pub fn positions<R: Rng>(&self, rng: &mut R) -> Result<Vec<Vec3>, SceneError> {
        self.validate()?;
        if self.count == 0 {
            return Ok(Vec::new());
        }

        let step = self.sector_width();
        let jitter = self.jitter_bound();
        let phase = if self.random_phase {
            rng.random_range(0.0..TAU)
        } else {
            0.0
        };

        let positions = (0..self.count)
            .map(|sector| {
                let offset = rng.random_range(-jitter..=jitter);
                let angle = (phase + sector as f32 * step + offset).rem_euclid(TAU);
                let radius = rng.random_range(self.min_radius..=self.field_radius);
                Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
            })
            .collect();

        Ok(positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted_angles(positions: &[Vec3]) -> Vec<f32> {
        let mut angles: Vec<f32> = positions
            .iter()
            .map(|p| p.z.atan2(p.x).rem_euclid(TAU))
            .collect();
        angles.sort_by(|a, b| a.total_cmp(b));
        angles
    }

    fn min_gap(angles: &[f32]) -> f32 {
        let wrap = angles[0] + TAU - angles[angles.len() - 1];
        angles
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold(wrap, f32::min)
    }

    #[test]
    fn fielder_positions_respect_radii_and_spacing() {
        let layout = RingLayout::fielders();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let positions = layout.positions(&mut rng).unwrap();
            assert_eq!(positions.len(), FIELDER_COUNT);

            for position in &positions {
                let radius = Vec2::new(position.x, position.z).length();
                assert!(radius >= FIELD_MIN_RADIUS - 1e-3, "seed {seed}: {radius}");
                assert!(radius <= FIELD_RADIUS + 1e-3, "seed {seed}: {radius}");
                assert_eq!(position.y, 0.0);
            }

            let gap = min_gap(&sorted_angles(&positions));
            assert!(gap >= layout.min_spacing - 1e-4, "seed {seed}: gap {gap}");
            assert!(gap >= layout.sector_width() - 2.0 * layout.jitter_bound() - 1e-4);
        }
    }

    #[test]
    fn spacing_holds_for_other_counts() {
        for count in [1usize, 2, 3, 5, 12, 40] {
            let layout = RingLayout {
                count,
                min_radius: 1.0,
                field_radius: 2.0,
                min_spacing: TAU / count as f32 * 0.75,
                random_phase: true,
            };
            for seed in 0..100 {
                let mut rng = StdRng::seed_from_u64(seed);
                let positions = layout.positions(&mut rng).unwrap();
                assert_eq!(positions.len(), count);
                if count > 1 {
                    let gap = min_gap(&sorted_angles(&positions));
                    assert!(gap >= layout.min_spacing - 1e-4);
                }
            }
        }
    }

    #[test]
    fn zero_spacing_allows_jitter_up_to_half_a_sector() {
        let layout = RingLayout {
            min_spacing: 0.0,
            ..RingLayout::fielders()
        };
        assert!((layout.jitter_bound() - layout.sector_width() / 2.0).abs() < 1e-6);
    }

    #[test]
    fn empty_ring_has_no_positions() {
        let layout = RingLayout {
            count: 0,
            ..RingLayout::fielders()
        };
        let mut rng = StdRng::seed_from_u64(7);
        assert!(layout.positions(&mut rng).unwrap().is_empty());
    }

    #[test]
    fn inverted_radii_are_rejected() {
        let layout = RingLayout {
            min_radius: 60.0,
            field_radius: 50.0,
            ..RingLayout::fielders()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            layout.positions(&mut rng),
            Err(SceneError::InvalidRadii {
                min: 60.0,
                max: 50.0
            })
        );
    }

    #[test]
    fn spacing_wider_than_a_sector_is_rejected() {
        let layout = RingLayout {
            min_spacing: 1.0,
            ..RingLayout::fielders()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            layout.positions(&mut rng),
            Err(SceneError::RingTooCrowded { count: 9, .. })
        ));
    }
}
