//! Reproducible sequences from a linear congruential generator.

use crate::engine::RandomEngine;
use crate::error::{EngineError, SeedError};

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;
/// 2^32; the modulus is applied by wrapping `u32` arithmetic.
const LCG_MODULUS: f64 = 4_294_967_296.0;

/// Stateful strategy whose output is fully determined by its initial seed.
///
/// The seed is replaced on every draw. Cloning forks the stream: the clone
/// replays exactly what the original would produce next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededLcgStrategy {
    seed: u32,
}

impl SeededLcgStrategy {
    /// Creates a strategy starting from `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Creates a strategy from an untyped seed, such as a JSON number.
    ///
    /// # Errors
    ///
    /// Returns `SeedError::NotInteger` for fractional or non-finite seeds and
    /// `SeedError::OutOfRange` for seeds outside `[0, 2^32)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64(seed: f64) -> Result<Self, SeedError> {
        if !seed.is_finite() || seed.fract() != 0.0 {
            return Err(SeedError::NotInteger(seed));
        }
        if !(0.0..LCG_MODULUS).contains(&seed) {
            return Err(SeedError::OutOfRange(seed));
        }
        Ok(Self::new(seed as u32))
    }

    /// The current seed, i.e. the state the next draw starts from.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    fn advance(&mut self) -> f64 {
        self.seed = self
            .seed
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        f64::from(self.seed) / LCG_MODULUS
    }
}

impl TryFrom<i64> for SeededLcgStrategy {
    type Error = SeedError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(seed: i64) -> Result<Self, Self::Error> {
        u32::try_from(seed)
            .map(Self::new)
            .map_err(|_| SeedError::OutOfRange(seed as f64))
    }
}

impl RandomEngine for SeededLcgStrategy {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        Ok(self.advance())
    }
}
