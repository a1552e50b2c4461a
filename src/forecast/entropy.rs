//! Random generator factories.
//!
//! Each request asks the source for its own [`StdRng`], so no generator is
//! ever shared between concurrent handlers.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Hands out one independent generator per call.
pub trait EntropySource: Send + Sync {
    fn generator(&self) -> StdRng;
}

/// Production source: every generator is seeded from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn generator(&self) -> StdRng {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Deterministic source: every generator starts from the same seed.
#[derive(Debug, Clone, Copy)]
pub struct SeededEntropy(pub u64);

impl EntropySource for SeededEntropy {
    fn generator(&self) -> StdRng {
        StdRng::seed_from_u64(self.0)
    }
}
