//! Engine error types.

use thiserror::Error;

/// A `[min, max]` request rejected before any sampling took place.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    /// At least one bound has a fractional part or is not finite.
    #[error(
        "invalid range: both minimum ({min}) and maximum ({max}) values must be integers"
    )]
    NotInteger {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// At least one bound is integral but does not fit in an `i64`.
    #[error(
        "invalid range: both minimum ({min}) and maximum ({max}) values must fit in a 64-bit signed integer"
    )]
    OutOfRange {
        /// The requested minimum.
        min: f64,
        /// The requested maximum.
        max: f64,
    },

    /// At least one bound is zero or negative.
    #[error(
        "invalid range: both minimum ({min}) and maximum ({max}) values must be positive integers greater than zero"
    )]
    NotPositive {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },

    /// The bounds are inverted.
    #[error("invalid range: the minimum value ({min}) cannot be greater than the maximum value ({max})")]
    MinGreaterThanMax {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },
}

/// Errors produced by [`RandomEngine::generate`](crate::RandomEngine::generate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The requested range failed validation.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A cumulative-distribution scan found no bucket for the raw value.
    ///
    /// Only reachable if weight-table validation let an inconsistent table
    /// through.
    #[error("internal consistency error: no weighted face matches raw value {raw}")]
    InternalConsistency {
        /// The raw value that fell through the scan.
        raw: f64,
    },
}

/// A seed rejected by [`SeededLcgStrategy`](crate::strategy::SeededLcgStrategy).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// The seed has a fractional part or is not finite.
    #[error("seed must be an integer, got {0}")]
    NotInteger(f64),

    /// The seed does not fit in 32 unsigned bits.
    #[error("seed must be a 32-bit unsigned integer (0 <= seed < 2^32), got {0}")]
    OutOfRange(f64),
}

/// A weight table rejected by [`WeightTable`](crate::strategy::WeightTable).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightTableError {
    /// JSON input was not an object.
    #[error("weight table must be an object mapping faces to probabilities, got {0}")]
    NotAnObject(String),

    /// A key is not a positive integer.
    #[error("invalid key \"{key}\": all keys must be positive integers")]
    InvalidKey {
        /// The offending key, as supplied.
        key: String,
    },

    /// A value is not a number in `[0, 1]`.
    #[error(
        "invalid value for key \"{key}\": all values must be a number between 0 and 1 (inclusive), received {value}"
    )]
    InvalidValue {
        /// The key the value belongs to.
        key: String,
        /// The offending value, as supplied.
        value: String,
    },

    /// The same face appears more than once.
    #[error("duplicate weight entry for face {0}")]
    DuplicateFace(u32),

    /// The faces do not form the contiguous range `1..=N`.
    #[error(
        "incorrect number of weight entries: expected entries from 1 to {expected}, but received {actual} entries total"
    )]
    FaceCountMismatch {
        /// The highest face supplied.
        expected: u32,
        /// The number of entries supplied.
        actual: usize,
    },

    /// The probabilities do not sum to exactly one.
    #[error("incorrect weights provided, the total of all weights expected to be 1, got {sum}")]
    SumNotOne {
        /// The computed sum.
        sum: f64,
    },
}

/// An adaptive-bias configuration rejected at construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdaptiveBiasConfigError {
    /// The history window cannot hold any entries.
    #[error("history limit must be at least 1")]
    EmptyHistory,
}

/// Errors raised while building an engine from an [`EngineConfig`](crate::config::EngineConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The seeded strategy rejected its seed.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The weighted strategy rejected its table.
    #[error(transparent)]
    WeightTable(#[from] WeightTableError),

    /// The adaptive strategy rejected its configuration.
    #[error(transparent)]
    AdaptiveBias(#[from] AdaptiveBiasConfigError),
}
