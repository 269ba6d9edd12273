use rand::{distributions::Uniform, Rng as _, SeedableRng};
use rand_pcg::Pcg32;

use crate::Float;

const ONE_MINUS_EPSILON: Float = 1.0 - Float::EPSILON / 2.0;

/// A small, fast random number source (PCG32) for palette generation.
///
/// Deterministic for a given seed, so generated palettes are reproducible.
#[derive(Clone)]
pub struct Rng {
    pcg: Pcg32,
    uniform: Uniform<Float>,
}

impl Rng {
    pub fn new(state: u64, inc: u64) -> Self {
        Self {
            pcg: Pcg32::new(state, inc),
            uniform: Uniform::new_inclusive(0.0, ONE_MINUS_EPSILON),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            pcg: Pcg32::seed_from_u64(seed),
            uniform: Uniform::from(0.0..1.0),
        }
    }

    /// A uniform sample in [0, 1).
    pub fn uniform_float(&mut self) -> Float {
        self.pcg.sample(self.uniform)
    }

    /// A uniform index in [0, n).
    pub fn uniform_usize(&mut self, n: usize) -> usize {
        self.pcg.gen_range(0..n)
    }
}

impl Default for Rng {
    fn default() -> Self {
        const PCG32_DEFAULT_STATE: u64 = 0xcafef00dd15ea5e5;
        const PCG32_DEFAULT_STREAM: u64 = 0xa02bdbf7bb3c0a7;
        Self::new(PCG32_DEFAULT_STATE, PCG32_DEFAULT_STREAM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = Rng::default();
        for _ in 0..1000 {
            let v = rng.uniform_float();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = Rng::from_seed(42);
        let mut b = Rng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_float(), b.uniform_float());
            assert_eq!(a.uniform_usize(17), b.uniform_usize(17));
        }
    }

    #[test]
    fn indices_stay_in_range() {
        let mut rng = Rng::from_seed(7);
        for _ in 0..1000 {
            assert!(rng.uniform_usize(5) < 5);
        }
    }
}
