//! Integration tests for the engine contract across every strategy.

use fateweaver_core::config::EngineConfig;
use fateweaver_core::strategy::{
    AdaptiveBiasStrategy, SeededLcgStrategy, UniformStrategy, WeightTable,
    WeightedDiscreteStrategy,
};
use fateweaver_core::{EngineError, RandomEngine, RangeError};

fn range_bound_engines() -> Vec<(&'static str, Box<dyn RandomEngine>)> {
    let uniform: Box<dyn RandomEngine> = Box::new(UniformStrategy::new());
    let seeded: Box<dyn RandomEngine> = Box::new(SeededLcgStrategy::new(1234));
    let adaptive: Box<dyn RandomEngine> = Box::new(AdaptiveBiasStrategy::new());
    vec![("uniform", uniform), ("seeded", seeded), ("adaptive", adaptive)]
}

#[test]
fn test_every_strategy_stays_within_requested_range() {
    for (name, mut engine) in range_bound_engines() {
        for (min, max) in [(1, 1), (1, 2), (1, 6), (1, 20), (10, 12), (1, 100)] {
            for _ in 0..300 {
                let value = engine.generate(min, max).unwrap();
                assert!(
                    (min..=max).contains(&value),
                    "{name} produced {value} outside [{min}, {max}]"
                );
            }
        }
    }
}

#[test]
fn test_weighted_strategy_stays_within_its_faces() {
    let table = WeightTable::new([(1, 0.25), (2, 0.25), (3, 0.25), (4, 0.25)]).unwrap();
    let mut engine = WeightedDiscreteStrategy::new(table);

    for _ in 0..1_000 {
        let face = engine.generate(1, 4).unwrap();
        assert!((1..=4).contains(&face));
    }
}

#[test]
fn test_every_strategy_rejects_invalid_ranges_identically() {
    let table = WeightTable::new([(1, 1.0)]).unwrap();
    let mut engines = range_bound_engines();
    let weighted: Box<dyn RandomEngine> = Box::new(WeightedDiscreteStrategy::new(table));
    engines.push(("weighted", weighted));

    for (name, mut engine) in engines {
        assert_eq!(
            engine.generate(5, 3),
            Err(EngineError::Range(RangeError::MinGreaterThanMax { min: 5, max: 3 })),
            "{name}"
        );
        assert_eq!(
            engine.generate(0, 3),
            Err(EngineError::Range(RangeError::NotPositive { min: 0, max: 3 })),
            "{name}"
        );
    }
}

#[test]
fn test_rejected_call_does_not_advance_seeded_stream() {
    // Arrange
    let mut interrupted = SeededLcgStrategy::new(77);
    let mut clean = SeededLcgStrategy::new(77);

    // Act
    let _ = interrupted.generate(3, 1);
    let _ = interrupted.generate(-4, 6);
    let left: Vec<i64> = (0..10).map(|_| interrupted.generate(1, 20).unwrap()).collect();
    let right: Vec<i64> = (0..10).map(|_| clean.generate(1, 20).unwrap()).collect();

    // Assert
    assert_eq!(left, right);
}

#[test]
fn test_configured_seeded_engines_replay_identically() {
    let config: EngineConfig =
        serde_json::from_value(serde_json::json!({ "kind": "seeded", "seed": 2_718_281_828_u32 }))
            .unwrap();
    let mut first = config.build().unwrap();
    let mut second = config.build().unwrap();

    for _ in 0..500 {
        assert_eq!(first.generate(1, 1000), second.generate(1, 1000));
    }
}
