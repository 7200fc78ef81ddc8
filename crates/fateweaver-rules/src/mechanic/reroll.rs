//! Conditional rerolls with a bounded budget.

use fateweaver_core::{RandomEngine, RangeRequest};

use super::{Mechanic, MechanicOutcome};
use crate::error::RulesError;

/// Rerolls while the result is one of `targets`, at most `max_rerolls`
/// times. The last draw is the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reroll {
    targets: Vec<i64>,
    max_rerolls: u32,
}

impl Reroll {
    /// Creates a reroll mechanic.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::EmptyRerollTargets` if `targets` is empty, or
    /// `RulesError::InvalidRerollCount` if `max_rerolls` is zero.
    pub fn new(targets: Vec<i64>, max_rerolls: u32) -> Result<Self, RulesError> {
        if targets.is_empty() {
            return Err(RulesError::EmptyRerollTargets);
        }
        if max_rerolls == 0 {
            return Err(RulesError::InvalidRerollCount(max_rerolls));
        }
        Ok(Self {
            targets,
            max_rerolls,
        })
    }

    /// Creates a mechanic allowing a single reroll.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::EmptyRerollTargets` if `targets` is empty.
    pub fn once(targets: Vec<i64>) -> Result<Self, RulesError> {
        Self::new(targets, 1)
    }

    /// Results that trigger a reroll.
    #[must_use]
    pub fn targets(&self) -> &[i64] {
        &self.targets
    }

    /// Maximum number of rerolls per roll.
    #[must_use]
    pub fn max_rerolls(&self) -> u32 {
        self.max_rerolls
    }
}

impl Mechanic for Reroll {
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError> {
        let mut result = engine.generate_in(range)?;
        let mut rolls = vec![result];
        let mut remaining = self.max_rerolls;

        while remaining > 0 && self.targets.contains(&result) {
            result = engine.generate_in(range)?;
            rolls.push(result);
            remaining -= 1;
        }

        Ok(MechanicOutcome { result, rolls })
    }
}
