//! Independent draws from the ambient entropy source.

use crate::engine::RandomEngine;
use crate::entropy::{EntropySource, ThreadEntropy};
use crate::error::EngineError;

/// Stateless strategy drawing each raw sample independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformStrategy<E = ThreadEntropy> {
    entropy: E,
}

impl UniformStrategy {
    /// Creates a strategy backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: EntropySource> UniformStrategy<E> {
    /// Creates a strategy backed by the given entropy source.
    #[must_use]
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }
}

impl<E: EntropySource> RandomEngine for UniformStrategy<E> {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        Ok(self.entropy.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::RandEntropy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_stays_within_range() {
        let mut strategy = UniformStrategy::new();
        for (min, max) in [(1, 1), (1, 6), (1, 20), (3, 4), (50, 100)] {
            for _ in 0..500 {
                let value = strategy.generate(min, max).unwrap();
                assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
            }
        }
    }

    #[test]
    fn test_generate_covers_every_face() {
        let mut strategy = UniformStrategy::with_entropy(RandEntropy::new(StdRng::seed_from_u64(11)));
        let mut seen = [false; 6];
        for _ in 0..2_000 {
            let value = strategy.generate(1, 6).unwrap();
            seen[usize::try_from(value - 1).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_generate_rejects_invalid_range() {
        let mut strategy = UniformStrategy::new();
        assert!(strategy.generate(0, 6).is_err());
        assert!(strategy.generate(6, 1).is_err());
    }
}
