//! Shared signal generators for the goertzel-dbm benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reproducible uniform noise in `[-1, 1)`.
pub fn noise(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(0x6f65);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}
