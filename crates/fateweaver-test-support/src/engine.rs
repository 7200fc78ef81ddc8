//! Scripted engines for testing code that consumes the engine contract.

use fateweaver_core::{EngineError, RandomEngine, RangeRequest};

/// An engine whose `generate` always returns the same value, whatever the
/// range. Range validation still applies.
#[derive(Debug, Clone, Copy)]
pub struct FixedEngine(pub i64);

impl RandomEngine for FixedEngine {
    #[allow(clippy::cast_precision_loss)]
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        Ok(self.0 as f64)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale_to_range(&self, raw: f64, _range: RangeRequest) -> i64 {
        raw as i64
    }
}

/// An engine whose `generate` returns outcomes from a predetermined
/// sequence and records every range it was asked for. Panics if the
/// sequence is exhausted.
#[derive(Debug, Clone, Default)]
pub struct SequenceEngine {
    values: Vec<i64>,
    index: usize,
    requests: Vec<RangeRequest>,
}

impl SequenceEngine {
    /// Create a new `SequenceEngine` with the given outcomes.
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            index: 0,
            requests: Vec::new(),
        }
    }

    /// Every validated range passed to `generate`, in call order.
    #[must_use]
    pub fn requests(&self) -> &[RangeRequest] {
        &self.requests
    }

    /// Number of outcomes handed out so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.index
    }
}

impl RandomEngine for SequenceEngine {
    #[allow(clippy::cast_precision_loss)]
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        let val = self.values[self.index];
        self.index += 1;
        Ok(val as f64)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale_to_range(&self, raw: f64, _range: RangeRequest) -> i64 {
        raw as i64
    }

    fn generate_in(&mut self, range: RangeRequest) -> Result<i64, EngineError> {
        self.requests.push(range);
        let raw = self.raw_sample()?;
        Ok(self.scale_to_range(raw, range))
    }
}
