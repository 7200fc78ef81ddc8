//! Deterministic `EntropySource` implementations for tests.

use fateweaver_core::entropy::EntropySource;

/// A source that always returns the same raw value. Suitable for tests that
/// need one specific point of the unit interval.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy(pub f64);

impl EntropySource for FixedEntropy {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// A source that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable raw
/// samples (e.g., driving the adaptive-bias history).
#[derive(Debug, Clone)]
pub struct SequenceEntropy {
    values: Vec<f64>,
    index: usize,
}

impl SequenceEntropy {
    /// Create a new `SequenceEntropy` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl EntropySource for SequenceEntropy {
    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
