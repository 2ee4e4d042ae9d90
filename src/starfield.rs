//! Decorative star field
//!
//! Generated once at startup and never touched again; restarting a round keeps
//! the same sky. Stars twinkle as a function of elapsed time only.

use rand::Rng;

/// One background star
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: i32,
    pub y: i32,
    /// Peak intensity (100-255)
    pub brightness: u8,
    /// Radius in pixels (1-3)
    pub size: i32,
}

impl Star {
    /// Grey level at `ticks_ms` milliseconds since startup
    ///
    /// Oscillates between 40% and 100% of `brightness`, phase-shifted by `x` so
    /// neighbouring stars do not pulse together.
    pub fn intensity(&self, ticks_ms: u64) -> u8 {
        let twinkle = (ticks_ms as f32 * 0.01 + self.x as f32 * 0.1).sin() * 0.3 + 0.7;
        (self.brightness as f32 * twinkle) as u8
    }
}

/// Immutable collection of stars
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatters `count` stars over a `width` x `height` canvas
    pub fn generate(width: u32, height: u32, count: usize, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                x: rng.random_range(0..=width as i32),
                y: rng.random_range(0..=height as i32),
                brightness: rng.random_range(100..=255),
                size: rng.random_range(1..=3),
            })
            .collect();

        StarField { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = StarField::generate(1000, 700, 100, &mut rng);
        assert_eq!(field.stars().len(), 100);
        for star in field.stars() {
            assert!((0..=1000).contains(&star.x));
            assert!((0..=700).contains(&star.y));
            assert!(star.brightness >= 100);
            assert!((1..=3).contains(&star.size));
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = StarField::generate(1000, 700, 20, &mut StdRng::seed_from_u64(42));
        let b = StarField::generate(1000, 700, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_intensity_range() {
        let star = Star { x: 10, y: 10, brightness: 200, size: 2 };
        for ticks in (0..5000).step_by(37) {
            let value = star.intensity(ticks);
            // 0.4 * 200 = 80, allow for float truncation
            assert!((79..=200).contains(&value), "ticks {ticks}: {value}");
        }
    }

    #[test]
    fn test_intensity_varies_over_time() {
        let star = Star { x: 0, y: 0, brightness: 255, size: 1 };
        assert_ne!(star.intensity(0), star.intensity(150));
    }
}
