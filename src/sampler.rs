//! Simulated MV/Output sample source.
//!
//! Each call draws two independent values uniformly from
//! [`SAMPLE_MIN`, `SAMPLE_MAX`). Nothing about previous samples or the PID
//! parameters influences the next draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::{SAMPLE_MAX, SAMPLE_MIN};

/// Uniform random generator of `(mv, output)` pairs
pub struct SampleGenerator {
    rng: StdRng,
}

impl SampleGenerator {
    /// Create a generator seeded from the OS entropy source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic generator (used by tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next `(mv, output)` pair
    pub fn sample(&mut self) -> (f64, f64) {
        let mv = self.rng.gen_range(SAMPLE_MIN..SAMPLE_MAX);
        let output = self.rng.gen_range(SAMPLE_MIN..SAMPLE_MAX);
        (mv, output)
    }
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SampleGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SampleGenerator")
            .field("rng", &"<StdRng>")
            .finish()
    }
}

/// Endless stream of samples
impl Iterator for SampleGenerator {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.sample())
    }
}
