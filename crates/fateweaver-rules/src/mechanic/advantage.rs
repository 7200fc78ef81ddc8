//! Two draws, keep the better or the worse.

use fateweaver_core::{RandomEngine, RangeRequest};

use super::{Mechanic, MechanicOutcome};
use crate::error::RulesError;

fn draw_pair(
    range: RangeRequest,
    engine: &mut dyn RandomEngine,
) -> Result<(i64, i64), RulesError> {
    let first = engine.generate_in(range)?;
    let second = engine.generate_in(range)?;
    Ok((first, second))
}

/// Draws twice and keeps the higher result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Advantage;

impl Mechanic for Advantage {
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError> {
        let (first, second) = draw_pair(range, engine)?;
        Ok(MechanicOutcome {
            result: first.max(second),
            rolls: vec![first, second],
        })
    }
}

/// Draws twice and keeps the lower result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disadvantage;

impl Mechanic for Disadvantage {
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError> {
        let (first, second) = draw_pair(range, engine)?;
        Ok(MechanicOutcome {
            result: first.min(second),
            rolls: vec![first, second],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fateweaver_core::strategy::SeededLcgStrategy;
    use fateweaver_test_support::SequenceEngine;

    fn d20() -> RangeRequest {
        RangeRequest::new(1, 20).unwrap()
    }

    #[test]
    fn test_advantage_keeps_higher_draw() {
        let mut engine = SequenceEngine::new(vec![7, 15]);

        let outcome = Advantage.resolve(d20(), &mut engine).unwrap();

        assert_eq!(outcome.result, 15);
        assert_eq!(outcome.rolls, vec![7, 15]);
    }

    #[test]
    fn test_advantage_order_does_not_matter() {
        let mut engine = SequenceEngine::new(vec![15, 7]);
        assert_eq!(Advantage.resolve(d20(), &mut engine).unwrap().result, 15);
    }

    #[test]
    fn test_disadvantage_keeps_lower_draw() {
        let mut engine = SequenceEngine::new(vec![7, 15]);

        let outcome = Disadvantage.resolve(d20(), &mut engine).unwrap();

        assert_eq!(outcome.result, 7);
        assert_eq!(outcome.rolls, vec![7, 15]);
    }

    #[test]
    fn test_both_draws_use_requested_range() {
        let mut engine = SequenceEngine::new(vec![3, 4]);

        Advantage.resolve(d20(), &mut engine).unwrap();

        assert_eq!(engine.requests(), &[d20(), d20()]);
    }

    #[test]
    fn test_draws_advance_seeded_stream() {
        // Seed 0 yields 5 then 6 on a d20.
        let mut engine = SeededLcgStrategy::new(0);

        let outcome = Disadvantage.resolve(d20(), &mut engine).unwrap();

        assert_eq!(outcome.rolls, vec![5, 6]);
        assert_eq!(outcome.result, 5);
    }
}
