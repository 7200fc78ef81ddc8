//! The roll orchestrator.

use std::fmt;

use fateweaver_core::strategy::UniformStrategy;
use fateweaver_core::{RandomEngine, RangeRequest};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RulesError;
use crate::mechanic::{Advantage, Disadvantage, Mechanic, SingleRoll};

/// The outcome of a modified roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The mechanic's result before the modifier.
    pub natural: i64,
    /// `natural + modifier`.
    pub modified: i64,
    /// Every engine draw made, in order.
    pub roll_sequence: Vec<i64>,
}

/// Resolves one roll with the given mechanic and engine, then applies
/// `modifier`.
///
/// # Errors
///
/// Returns `RulesError` if the mechanic or the engine fails.
pub fn resolve_roll(
    range: RangeRequest,
    modifier: i64,
    mechanic: &dyn Mechanic,
    engine: &mut dyn RandomEngine,
) -> Result<RollOutcome, RulesError> {
    let outcome = mechanic.resolve(range, engine)?;
    let modified = outcome.result.saturating_add(modifier);
    debug!(
        min = range.min(),
        max = range.max(),
        ?mechanic,
        natural = outcome.result,
        modified,
        draws = outcome.rolls.len(),
        "resolved roll"
    );
    Ok(RollOutcome {
        natural: outcome.result,
        modified,
        roll_sequence: outcome.rolls,
    })
}

/// A fixed range bound to an engine and a default mechanic.
///
/// The engine is owned, so seeded and adaptive streams carry their state
/// across every roll made through this value.
pub struct Roll {
    range: RangeRequest,
    engine: Box<dyn RandomEngine>,
    mechanic: Box<dyn Mechanic>,
}

impl Roll {
    /// Binds `[min, max]` to a uniform engine and a single-roll mechanic.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::InvalidRange` if the bounds are invalid.
    pub fn new(min: i64, max: i64) -> Result<Self, RulesError> {
        Ok(Self::from_range(RangeRequest::new(min, max)?))
    }

    /// Binds an already validated range to a uniform engine and a
    /// single-roll mechanic.
    #[must_use]
    pub fn from_range(range: RangeRequest) -> Self {
        Self {
            range,
            engine: Box::new(UniformStrategy::new()),
            mechanic: Box::new(SingleRoll),
        }
    }

    /// Replaces the engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl RandomEngine + 'static) -> Self {
        self.engine = Box::new(engine);
        self
    }

    /// Replaces the default mechanic.
    #[must_use]
    pub fn with_mechanic(mut self, mechanic: impl Mechanic + 'static) -> Self {
        self.mechanic = Box::new(mechanic);
        self
    }

    /// The bound range.
    #[must_use]
    pub fn range(&self) -> RangeRequest {
        self.range
    }

    /// Rolls with the default mechanic.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if the mechanic or the engine fails.
    pub fn roll(&mut self, modifier: i64) -> Result<RollOutcome, RulesError> {
        resolve_roll(
            self.range,
            modifier,
            self.mechanic.as_ref(),
            self.engine.as_mut(),
        )
    }

    /// Rolls once with `mechanic` instead of the default.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if the mechanic or the engine fails.
    pub fn roll_with(
        &mut self,
        modifier: i64,
        mechanic: &dyn Mechanic,
    ) -> Result<RollOutcome, RulesError> {
        resolve_roll(self.range, modifier, mechanic, self.engine.as_mut())
    }

    /// Rolls once with advantage.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if the engine fails.
    pub fn roll_advantage(&mut self, modifier: i64) -> Result<RollOutcome, RulesError> {
        self.roll_with(modifier, &Advantage)
    }

    /// Rolls once with disadvantage.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if the engine fails.
    pub fn roll_disadvantage(&mut self, modifier: i64) -> Result<RollOutcome, RulesError> {
        self.roll_with(modifier, &Disadvantage)
    }
}

impl fmt::Debug for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roll")
            .field("range", &self.range)
            .field("mechanic", &self.mechanic)
            .finish_non_exhaustive()
    }
}
