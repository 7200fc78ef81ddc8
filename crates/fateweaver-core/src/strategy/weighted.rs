//! Sampling from an explicit discrete probability table.

use std::sync::Arc;

use serde_json::Value;

use crate::engine::{RandomEngine, RangeRequest};
use crate::entropy::{EntropySource, ThreadEntropy};
use crate::error::{EngineError, WeightTableError};

/// Probabilities for faces `1..=N`, validated to sum to exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    /// Probability of face `i + 1` at index `i`.
    weights: Vec<f64>,
}

impl WeightTable {
    /// Builds a table from `(face, probability)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `WeightTableError` if a face is not a positive integer, a
    /// probability is outside `[0, 1]`, the faces are not exactly `1..=N`, or
    /// the probabilities do not sum to exactly one.
    pub fn new<I>(entries: I) -> Result<Self, WeightTableError>
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let mut checked = Vec::new();
        for (key, value) in entries {
            let face = u32::try_from(key)
                .ok()
                .filter(|face| *face > 0)
                .ok_or_else(|| WeightTableError::InvalidKey {
                    key: key.to_string(),
                })?;
            if !is_probability(value) {
                return Err(WeightTableError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
            checked.push((face, value));
        }
        Self::from_checked(checked)
    }

    /// Builds a table from a JSON object such as `{"1": 0.5, "2": 0.5}`.
    ///
    /// # Errors
    ///
    /// Returns `WeightTableError::NotAnObject` for non-object input, then the
    /// same errors as [`WeightTable::new`]. Non-numeric values (booleans,
    /// null, strings, arrays, objects) are rejected as invalid values.
    pub fn from_json(value: &Value) -> Result<Self, WeightTableError> {
        let Value::Object(map) = value else {
            return Err(WeightTableError::NotAnObject(value.to_string()));
        };

        let mut checked = Vec::with_capacity(map.len());
        for (key, raw) in map {
            let face = parse_face(key).ok_or_else(|| WeightTableError::InvalidKey {
                key: key.clone(),
            })?;
            let probability = raw
                .as_f64()
                .filter(|p| is_probability(*p))
                .ok_or_else(|| WeightTableError::InvalidValue {
                    key: key.clone(),
                    value: raw.to_string(),
                })?;
            checked.push((face, probability));
        }
        Self::from_checked(checked)
    }

    /// Applies the table-wide checks to entries whose keys and values are
    /// individually valid.
    #[allow(clippy::float_cmp)]
    fn from_checked(mut entries: Vec<(u32, f64)>) -> Result<Self, WeightTableError> {
        entries.sort_by_key(|(face, _)| *face);
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(WeightTableError::DuplicateFace(pair[0].0));
        }

        let max_face = entries.last().map_or(0, |(face, _)| *face);
        if usize::try_from(max_face).ok() != Some(entries.len()) {
            return Err(WeightTableError::FaceCountMismatch {
                expected: max_face,
                actual: entries.len(),
            });
        }

        let weights: Vec<f64> = entries.into_iter().map(|(_, p)| p).collect();
        // Summed in face order so the total matches the final cumulative bound.
        let sum = weights.iter().fold(0.0, |acc, w| acc + w);
        if sum != 1.0 {
            return Err(WeightTableError::SumNotOne { sum });
        }

        Ok(Self { weights })
    }

    /// Number of faces.
    #[must_use]
    pub fn faces(&self) -> usize {
        self.weights.len()
    }

    /// Probability of `face`, or `None` if the face is not in the table.
    #[must_use]
    pub fn probability(&self, face: u32) -> Option<f64> {
        let index = usize::try_from(face).ok()?.checked_sub(1)?;
        self.weights.get(index).copied()
    }

    /// Probabilities in face order.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

fn is_probability(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn parse_face(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|face| *face > 0)
}

/// Prefix sums of a [`WeightTable`] in face order.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeDistribution {
    bounds: Vec<f64>,
}

impl CumulativeDistribution {
    /// Derives the distribution for `table`.
    #[must_use]
    pub fn from_table(table: &WeightTable) -> Self {
        let bounds = table
            .weights()
            .iter()
            .scan(0.0, |total, weight| {
                *total += weight;
                Some(*total)
            })
            .collect();
        Self { bounds }
    }

    /// The upper bound of each face's bucket, in face order.
    #[must_use]
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Returns the first face whose bound is strictly greater than `raw`.
    ///
    /// A raw value equal to a bound belongs to the next face.
    #[must_use]
    pub fn locate(&self, raw: f64) -> Option<u32> {
        let index = self.bounds.iter().position(|bound| raw < *bound)?;
        u32::try_from(index + 1).ok()
    }
}

/// Strategy drawing faces from a fixed [`WeightTable`].
///
/// The caller's range is ignored: outcomes are always faces of the table.
/// Clones share the table and its distribution.
#[derive(Debug, Clone)]
pub struct WeightedDiscreteStrategy<E = ThreadEntropy> {
    table: Arc<WeightTable>,
    cumulative: Arc<CumulativeDistribution>,
    entropy: E,
}

impl WeightedDiscreteStrategy {
    /// Creates a strategy backed by the thread-local generator.
    #[must_use]
    pub fn new(table: WeightTable) -> Self {
        Self::with_entropy(table, ThreadEntropy)
    }
}

impl<E: EntropySource> WeightedDiscreteStrategy<E> {
    /// Creates a strategy backed by the given entropy source.
    #[must_use]
    pub fn with_entropy(table: WeightTable, entropy: E) -> Self {
        let cumulative = CumulativeDistribution::from_table(&table);
        Self {
            table: Arc::new(table),
            cumulative: Arc::new(cumulative),
            entropy,
        }
    }

    /// The table this strategy samples from.
    #[must_use]
    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    /// The derived cumulative distribution.
    #[must_use]
    pub fn cumulative(&self) -> &CumulativeDistribution {
        &self.cumulative
    }

    /// Inverts a uniform `raw` value into a face.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InternalConsistency` if no bucket contains `raw`.
    pub fn pick_face(&self, raw: f64) -> Result<u32, EngineError> {
        self.cumulative
            .locate(raw)
            .ok_or(EngineError::InternalConsistency { raw })
    }
}

impl<E: EntropySource> RandomEngine for WeightedDiscreteStrategy<E> {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        let raw = self.entropy.next_f64();
        self.pick_face(raw).map(f64::from)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale_to_range(&self, face: f64, _range: RangeRequest) -> i64 {
        face as i64
    }
}
