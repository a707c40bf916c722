use crate::haversine::CoordinatePair;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

/// A reproducible stream of values uniform in [-1, 1].
pub struct ValueSource {
    seed: u32,
    rng: StdRng,
    unit: Uniform<f64>,
}

/// A seed for callers who didn't ask for one. Never zero, so it can be passed
/// straight back in to reproduce the run.
fn fresh_seed() -> u32 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1);
    if seed == 0 {
        1
    } else {
        seed
    }
}

impl ValueSource {
    /// A seed of zero means "pick one"; `seed()` reports what was picked.
    pub fn new(seed: u32) -> ValueSource {
        let seed = if seed == 0 { fresh_seed() } else { seed };
        ValueSource {
            seed,
            rng: StdRng::seed_from_u64(u64::from(seed)),
            unit: Uniform::new_inclusive(-1.0, 1.0),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_signed_unit(&mut self) -> f64 {
        self.unit.sample(&mut self.rng)
    }

    /// Draws x0, y0, x1, y1 in that order, scaled to longitude and latitude.
    pub fn next_pair(&mut self) -> CoordinatePair {
        let x0 = 180.0 * self.next_signed_unit();
        let y0 = 90.0 * self.next_signed_unit();
        let x1 = 180.0 * self.next_signed_unit();
        let y1 = 90.0 * self.next_signed_unit();
        CoordinatePair { x0, y0, x1, y1 }
    }
}
