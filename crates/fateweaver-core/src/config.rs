//! Declarative strategy configuration.
//!
//! Lets callers describe an engine as data (e.g. a JSON document in an
//! environment variable or request body) and build it in one step.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::RandomEngine;
use crate::error::ConfigError;
use crate::strategy::{
    AdaptiveBiasConfig, AdaptiveBiasStrategy, SeededLcgStrategy, UniformStrategy, WeightTable,
    WeightedDiscreteStrategy,
};

/// Which strategy to build, and with what options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineConfig {
    /// [`UniformStrategy`].
    #[default]
    Uniform,
    /// [`SeededLcgStrategy`] starting at `seed`.
    Seeded {
        /// Initial seed; validated as a 32-bit unsigned integer.
        seed: f64,
    },
    /// [`WeightedDiscreteStrategy`] over `weights`.
    Weighted {
        /// A JSON object mapping faces to probabilities.
        weights: Value,
    },
    /// [`AdaptiveBiasStrategy`] with the given tuning.
    Adaptive(AdaptiveBiasConfig),
}

impl EngineConfig {
    /// Builds the configured engine.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the strategy rejects its options.
    pub fn build(&self) -> Result<Box<dyn RandomEngine>, ConfigError> {
        let engine: Box<dyn RandomEngine> = match self {
            Self::Uniform => Box::new(UniformStrategy::new()),
            Self::Seeded { seed } => Box::new(SeededLcgStrategy::from_f64(*seed)?),
            Self::Weighted { weights } => {
                Box::new(WeightedDiscreteStrategy::new(WeightTable::from_json(weights)?))
            }
            Self::Adaptive(config) => Box::new(AdaptiveBiasStrategy::with_config(*config)?),
        };
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AdaptiveBiasConfigError, SeedError, WeightTableError};
    use serde_json::json;

    fn parse(value: Value) -> EngineConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_parses_every_kind() {
        assert_eq!(parse(json!({"kind": "uniform"})), EngineConfig::Uniform);
        assert_eq!(
            parse(json!({"kind": "seeded", "seed": 42})),
            EngineConfig::Seeded { seed: 42.0 }
        );
        assert!(matches!(
            parse(json!({"kind": "weighted", "weights": {"1": 1.0}})),
            EngineConfig::Weighted { .. }
        ));
        assert_eq!(
            parse(json!({"kind": "adaptive", "historyLimit": 5})),
            EngineConfig::Adaptive(AdaptiveBiasConfig {
                history_limit: 5,
                ..AdaptiveBiasConfig::default()
            })
        );
    }

    #[test]
    fn test_seeded_config_builds_reproducible_engine() {
        let config = parse(json!({"kind": "seeded", "seed": 0}));
        let mut engine = config.build().unwrap();

        let rolls: Vec<i64> = (0..3).map(|_| engine.generate(1, 20).unwrap()).collect();

        assert_eq!(rolls, vec![5, 6, 17]);
    }

    #[test]
    fn test_weighted_config_builds_table_engine() {
        let config = parse(json!({"kind": "weighted", "weights": {"1": 0.0, "2": 1.0}}));
        let mut engine = config.build().unwrap();
        assert_eq!(engine.generate(1, 6).unwrap(), 2);
    }

    #[test]
    fn test_build_surfaces_strategy_errors() {
        assert_eq!(
            EngineConfig::Seeded { seed: -1.0 }.build().err(),
            Some(ConfigError::Seed(SeedError::OutOfRange(-1.0)))
        );
        assert_eq!(
            EngineConfig::Weighted {
                weights: json!({"1": 0.5, "2": 0.9})
            }
            .build()
            .err(),
            Some(ConfigError::WeightTable(WeightTableError::SumNotOne { sum: 1.4 }))
        );
        assert_eq!(
            EngineConfig::Adaptive(AdaptiveBiasConfig {
                history_limit: 0,
                ..AdaptiveBiasConfig::default()
            })
            .build()
            .err(),
            Some(ConfigError::AdaptiveBias(AdaptiveBiasConfigError::EmptyHistory))
        );
    }

    #[test]
    fn test_default_is_uniform() {
        let mut engine = EngineConfig::default().build().unwrap();
        let value = engine.generate(1, 6).unwrap();
        assert!((1..=6).contains(&value));
    }
}
