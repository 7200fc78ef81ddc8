//! Single pass-through draw.

use fateweaver_core::{RandomEngine, RangeRequest};

use super::{Mechanic, MechanicOutcome};
use crate::error::RulesError;

/// One draw, taken as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleRoll;

impl Mechanic for SingleRoll {
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError> {
        let result = engine.generate_in(range)?;
        Ok(MechanicOutcome {
            result,
            rolls: vec![result],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fateweaver_test_support::SequenceEngine;

    #[test]
    fn test_returns_single_draw() {
        let mut engine = SequenceEngine::new(vec![5]);

        let outcome = SingleRoll
            .resolve(RangeRequest::new(1, 6).unwrap(), &mut engine)
            .unwrap();

        assert_eq!(outcome, MechanicOutcome { result: 5, rolls: vec![5] });
        assert_eq!(engine.calls(), 1);
    }
}
