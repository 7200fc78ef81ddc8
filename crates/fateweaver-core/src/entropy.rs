//! Entropy source abstraction.
//!
//! In production, strategies draw from the thread-local generator. In tests
//! and simulations, a seeded or scripted source is injected instead.

use rand::{Rng, RngCore};

/// Abstraction over the ambient source of unit-interval samples.
pub trait EntropySource: Send + Sync {
    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// Production source that delegates to `rand`'s thread-local generator.
///
/// Holds no generator itself, so strategies built on it stay `Send + Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl EntropySource for ThreadEntropy {
    fn next_f64(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Adapts any `rand` generator, e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RandEntropy<R> {
    rng: R,
}

impl<R: RngCore> RandEntropy<R> {
    /// Wrap the given generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore + Send + Sync> EntropySource for RandEntropy<R> {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
