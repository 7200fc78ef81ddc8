//! The engine contract shared by every sampling strategy.
//!
//! A call to [`RandomEngine::generate`] validates the requested range, asks
//! the strategy for a raw sample, and maps that sample into the range. The
//! two hooks are separate so a strategy can replace the mapping without
//! touching validation.

use tracing::trace;

use crate::error::{EngineError, RangeError};

/// Raw samples at or above this value collapse to the range maximum.
pub const UPPER_COLLAPSE_THRESHOLD: f64 = 0.99;

/// A validated, inclusive `[min, max]` request.
///
/// Both bounds are at least one and `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeRequest {
    min: i64,
    max: i64,
}

impl RangeRequest {
    /// Validates and builds a range from integer bounds.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::NotPositive` if either bound is below one, or
    /// `RangeError::MinGreaterThanMax` if the bounds are inverted.
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min < 1 || max < 1 {
            return Err(RangeError::NotPositive { min, max });
        }
        if min > max {
            return Err(RangeError::MinGreaterThanMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// Validates and builds a range from untyped numeric bounds, such as
    /// values decoded from JSON.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::NotInteger` if either bound has a fractional part
    /// or is not finite, `RangeError::OutOfRange` if either bound does not
    /// fit in an `i64`, then the same errors as [`RangeRequest::new`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(min: f64, max: f64) -> Result<Self, RangeError> {
        if !is_integral(min) || !is_integral(max) {
            return Err(RangeError::NotInteger { min, max });
        }
        if !fits_i64(min) || !fits_i64(max) {
            return Err(RangeError::OutOfRange { min, max });
        }
        Self::new(min as i64, max as i64)
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The inclusive upper bound.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of distinct outcomes in the range.
    #[must_use]
    pub fn span(&self) -> i64 {
        self.max - self.min + 1
    }
}

fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

// 2^63 is exact in f64; anything at or above it saturates when cast.
fn fits_i64(value: f64) -> bool {
    let bound = 2f64.powi(63);
    value >= -bound && value < bound
}

/// Maps a raw unit-interval sample into `range`.
///
/// The top 1% of the unit interval collapses to `range.max()`; anything at
/// or below zero yields `range.min()`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn scale_to_range(raw: f64, range: RangeRequest) -> i64 {
    if raw >= UPPER_COLLAPSE_THRESHOLD {
        return range.max();
    }
    if raw <= 0.0 {
        return range.min();
    }
    let offset = (raw * range.span() as f64).floor() as i64;
    offset.saturating_add(range.min()).min(range.max())
}

/// A source of bounded integer outcomes.
///
/// Strategies implement [`raw_sample`](RandomEngine::raw_sample) and may
/// override [`scale_to_range`](RandomEngine::scale_to_range); callers only use
/// [`generate`](RandomEngine::generate).
pub trait RandomEngine: Send {
    /// Produce the next raw sample, updating any internal state.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InternalConsistency` if the strategy cannot map
    /// its draw to an outcome.
    fn raw_sample(&mut self) -> Result<f64, EngineError>;

    /// Map a raw sample into the requested range.
    fn scale_to_range(&self, raw: f64, range: RangeRequest) -> i64 {
        scale_to_range(raw, range)
    }

    /// Generate an outcome in `[min, max]`.
    ///
    /// Validation happens before any state is touched.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Range` if the bounds are invalid, or any error
    /// raised by the strategy's sampling hook.
    fn generate(&mut self, min: i64, max: i64) -> Result<i64, EngineError> {
        let range = RangeRequest::new(min, max)?;
        self.generate_in(range)
    }

    /// Generate an outcome in an already validated range.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the strategy's sampling hook.
    fn generate_in(&mut self, range: RangeRequest) -> Result<i64, EngineError> {
        let raw = self.raw_sample()?;
        let value = self.scale_to_range(raw, range);
        trace!(min = range.min(), max = range.max(), raw, value, "generated outcome");
        Ok(value)
    }
}

impl<T: RandomEngine + ?Sized> RandomEngine for Box<T> {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        (**self).raw_sample()
    }

    fn scale_to_range(&self, raw: f64, range: RangeRequest) -> i64 {
        (**self).scale_to_range(raw, range)
    }

    fn generate(&mut self, min: i64, max: i64) -> Result<i64, EngineError> {
        (**self).generate(min, max)
    }

    fn generate_in(&mut self, range: RangeRequest) -> Result<i64, EngineError> {
        (**self).generate_in(range)
    }
}

impl<T: RandomEngine + ?Sized> RandomEngine for &mut T {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        (**self).raw_sample()
    }

    fn scale_to_range(&self, raw: f64, range: RangeRequest) -> i64 {
        (**self).scale_to_range(raw, range)
    }

    fn generate(&mut self, min: i64, max: i64) -> Result<i64, EngineError> {
        (**self).generate(min, max)
    }

    fn generate_in(&mut self, range: RangeRequest) -> Result<i64, EngineError> {
        (**self).generate_in(range)
    }
}
