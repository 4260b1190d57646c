use crate::geometry::{Bounds, Position};
use glam::Vec2;
use rand::prelude::*;

/// Samples fresh positions for the evasive control.
///
/// Owns its RNG so a seeded engine replays the same escape path, which the
/// native replay and the tests rely on.
pub struct Placement {
    rng: StdRng,
}

impl Placement {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Uniform integer position inside `bounds`, both ends inclusive.
    pub fn sample(&mut self, bounds: &Bounds) -> Position {
        Position {
            left: self.rng.gen_range(bounds.min_left..=bounds.max_left),
            top: self.rng.gen_range(bounds.min_top..=bounds.max_top),
        }
    }

    pub fn place(&mut self, container: Vec2, element: Vec2, padding: i32) -> Position {
        let bounds = Bounds::new(container, element, padding);
        if bounds.is_degenerate() {
            log::debug!(
                "[flee] container {:.0}x{:.0} too small for {:.0}x{:.0} + {}px padding; clamping",
                container.x,
                container.y,
                element.x,
                element.y,
                padding
            );
        }
        self.sample(&bounds)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::from_entropy()
    }
}
