//! Streak dampening ("karmic") strategy.
//!
//! Remembers how recent draws were classified and nudges the next raw sample
//! away from whichever extreme has shown up more often. This is a heuristic
//! smoothing device: it makes no promise about the resulting distribution.
//!
//! The classification recorded in the history is that of the *biased* value,
//! so consecutive corrections compound.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::engine::RandomEngine;
use crate::entropy::{EntropySource, ThreadEntropy};
use crate::error::{AdaptiveBiasConfigError, EngineError};

/// Tuning knobs for [`AdaptiveBiasStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveBiasConfig {
    /// Values at or above this are classified [`OutcomeClass::High`].
    #[serde(alias = "highThreshold")]
    pub high_threshold: f64,
    /// Values at or below this are classified [`OutcomeClass::Low`].
    #[serde(alias = "lowThreshold")]
    pub low_threshold: f64,
    /// Amount added to or subtracted from a raw sample when correcting.
    #[serde(alias = "biasFactor")]
    pub bias_factor: f64,
    /// Maximum number of classifications remembered.
    #[serde(alias = "historyLimit")]
    pub history_limit: usize,
}

impl Default for AdaptiveBiasConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.8,
            low_threshold: 0.2,
            bias_factor: 0.2,
            history_limit: 10,
        }
    }
}

impl AdaptiveBiasConfig {
    /// Checks that the configuration describes a usable strategy.
    ///
    /// Thresholds and the bias factor are taken as given; equal thresholds
    /// classify every sample at that point as high.
    ///
    /// # Errors
    ///
    /// Returns `AdaptiveBiasConfigError::EmptyHistory` if the history limit
    /// is zero.
    pub fn validate(&self) -> Result<(), AdaptiveBiasConfigError> {
        if self.history_limit == 0 {
            return Err(AdaptiveBiasConfigError::EmptyHistory);
        }
        Ok(())
    }
}

/// How a sample was classified relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// At or above the high threshold.
    High,
    /// At or below the low threshold.
    Low,
    /// Strictly between the thresholds.
    Neutral,
}

/// Bounded FIFO of recent classifications. The oldest entry is evicted once
/// the limit is exceeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryWindow {
    entries: VecDeque<OutcomeClass>,
    limit: usize,
}

impl HistoryWindow {
    /// Creates an empty window holding at most `limit` entries.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit.saturating_add(1)),
            limit,
        }
    }

    /// Appends `class`, evicting the oldest entry on overflow.
    pub fn push(&mut self, class: OutcomeClass) {
        self.entries.push_back(class);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Number of [`OutcomeClass::High`] entries.
    #[must_use]
    pub fn high_count(&self) -> usize {
        self.count(OutcomeClass::High)
    }

    /// Number of [`OutcomeClass::Low`] entries.
    #[must_use]
    pub fn low_count(&self) -> usize {
        self.count(OutcomeClass::Low)
    }

    fn count(&self, class: OutcomeClass) -> usize {
        self.entries.iter().filter(|entry| **entry == class).count()
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the window holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = OutcomeClass> + '_ {
        self.entries.iter().copied()
    }
}

/// Stateful strategy that biases raw samples away from recent streaks.
#[derive(Debug, Clone)]
pub struct AdaptiveBiasStrategy<E = ThreadEntropy> {
    config: AdaptiveBiasConfig,
    history: HistoryWindow,
    entropy: E,
}

impl AdaptiveBiasStrategy {
    /// Creates a strategy with default tuning, backed by the thread-local
    /// generator.
    #[must_use]
    pub fn new() -> Self {
        let config = AdaptiveBiasConfig::default();
        Self {
            history: HistoryWindow::new(config.history_limit),
            config,
            entropy: ThreadEntropy,
        }
    }

    /// Creates a strategy with the given tuning, backed by the thread-local
    /// generator.
    ///
    /// # Errors
    ///
    /// Returns `AdaptiveBiasConfigError` if `config` is invalid.
    pub fn with_config(config: AdaptiveBiasConfig) -> Result<Self, AdaptiveBiasConfigError> {
        Self::with_entropy(config, ThreadEntropy)
    }
}

impl Default for AdaptiveBiasStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> AdaptiveBiasStrategy<E> {
    /// Creates a strategy with the given tuning and entropy source.
    ///
    /// # Errors
    ///
    /// Returns `AdaptiveBiasConfigError` if `config` is invalid.
    pub fn with_entropy(config: AdaptiveBiasConfig, entropy: E) -> Result<Self, AdaptiveBiasConfigError> {
        config.validate()?;
        Ok(Self {
            history: HistoryWindow::new(config.history_limit),
            config,
            entropy,
        })
    }

    /// The active tuning.
    #[must_use]
    pub fn config(&self) -> &AdaptiveBiasConfig {
        &self.config
    }

    /// The recent classifications.
    #[must_use]
    pub fn history(&self) -> &HistoryWindow {
        &self.history
    }

    /// Classifies `value` against the configured thresholds.
    #[must_use]
    pub fn classify(&self, value: f64) -> OutcomeClass {
        if value >= self.config.high_threshold {
            OutcomeClass::High
        } else if value <= self.config.low_threshold {
            OutcomeClass::Low
        } else {
            OutcomeClass::Neutral
        }
    }

    /// Biases `raw` against the current history, records the classification
    /// of the biased value, and returns it.
    pub fn apply_bias(&mut self, raw: f64) -> f64 {
        let highs = self.history.high_count();
        let lows = self.history.low_count();
        let biased = if lows > highs {
            (raw + self.config.bias_factor).min(1.0)
        } else if highs > lows {
            (raw - self.config.bias_factor).max(0.0)
        } else {
            raw
        };

        self.history.push(self.classify(biased));
        biased
    }
}

impl<E: EntropySource> RandomEngine for AdaptiveBiasStrategy<E> {
    fn raw_sample(&mut self) -> Result<f64, EngineError> {
        let raw = self.entropy.next_f64();
        Ok(self.apply_bias(raw))
    }
}
