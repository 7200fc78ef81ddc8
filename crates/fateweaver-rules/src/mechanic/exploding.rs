//! Exploding draws: rolling the maximum earns another draw.

use fateweaver_core::{RandomEngine, RangeRequest};
use tracing::warn;

use super::{Mechanic, MechanicOutcome};
use crate::error::RulesError;

/// Default cap on draws per exploding roll.
pub const DEFAULT_ROLL_LIMIT: usize = 1000;

/// Keeps drawing while the draw equals the range maximum and sums every
/// draw. A single-value range returns that value without drawing.
#[derive(Debug, Clone, Copy)]
pub struct Exploding {
    max_rolls: usize,
}

impl Exploding {
    /// Creates an exploding mechanic with the default roll limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_ROLL_LIMIT)
    }

    /// Creates an exploding mechanic that fails after `max_rolls` draws.
    #[must_use]
    pub fn with_limit(max_rolls: usize) -> Self {
        Self { max_rolls }
    }
}

impl Default for Exploding {
    fn default() -> Self {
        Self::new()
    }
}

impl Mechanic for Exploding {
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError> {
        if range.min() == range.max() {
            return Ok(MechanicOutcome {
                result: range.min(),
                rolls: vec![range.min()],
            });
        }

        let mut rolls = Vec::new();
        let mut total: i64 = 0;
        loop {
            if rolls.len() >= self.max_rolls {
                warn!(limit = self.max_rolls, "exploding roll hit its roll limit");
                return Err(RulesError::TooManyRolls {
                    limit: self.max_rolls,
                });
            }
            let roll = engine.generate_in(range)?;
            rolls.push(roll);
            total = total.saturating_add(roll);
            if roll != range.max() {
                break;
            }
        }

        Ok(MechanicOutcome {
            result: total,
            rolls,
        })
    }
}
