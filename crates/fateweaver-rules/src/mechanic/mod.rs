//! Roll mechanics.
//!
//! Each mechanic calls the engine zero or more times per logical roll and
//! reduces the draws to one result. Engines may carry state between calls,
//! so a mechanic never assumes two draws are independent.

mod advantage;
mod exploding;
mod reroll;
mod single;

use std::fmt;

use fateweaver_core::{RandomEngine, RangeRequest};
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

pub use advantage::{Advantage, Disadvantage};
pub use exploding::{DEFAULT_ROLL_LIMIT, Exploding};
pub use reroll::Reroll;
pub use single::SingleRoll;

/// The result of one logical roll, with every draw that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MechanicOutcome {
    /// The aggregated result.
    pub result: i64,
    /// Every draw made, in order.
    pub rolls: Vec<i64>,
}

/// A way of turning engine draws into a single roll result.
pub trait Mechanic: fmt::Debug + Send + Sync {
    /// Resolves one logical roll over `range`.
    ///
    /// # Errors
    ///
    /// Returns `RulesError::Engine` if a draw fails, or a mechanic-specific
    /// error.
    fn resolve(
        &self,
        range: RangeRequest,
        engine: &mut dyn RandomEngine,
    ) -> Result<MechanicOutcome, RulesError>;
}

fn default_roll_limit() -> usize {
    DEFAULT_ROLL_LIMIT
}

fn default_max_rerolls() -> u32 {
    1
}

/// Declarative mechanic selection, e.g. from a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MechanicConfig {
    /// [`SingleRoll`].
    #[default]
    Single,
    /// [`Advantage`].
    Advantage,
    /// [`Disadvantage`].
    Disadvantage,
    /// [`Exploding`].
    Exploding {
        /// Maximum number of draws before giving up.
        #[serde(default = "default_roll_limit")]
        max_rolls: usize,
    },
    /// [`Reroll`].
    Reroll {
        /// Results that trigger a reroll.
        targets: Vec<i64>,
        /// Maximum number of rerolls.
        #[serde(default = "default_max_rerolls")]
        max_rerolls: u32,
    },
}

impl MechanicConfig {
    /// Builds the configured mechanic.
    ///
    /// # Errors
    ///
    /// Returns `RulesError` if a reroll mechanic has no targets or a zero
    /// reroll budget.
    pub fn build(&self) -> Result<Box<dyn Mechanic>, RulesError> {
        let mechanic: Box<dyn Mechanic> = match self {
            Self::Single => Box::new(SingleRoll),
            Self::Advantage => Box::new(Advantage),
            Self::Disadvantage => Box::new(Disadvantage),
            Self::Exploding { max_rolls } => Box::new(Exploding::with_limit(*max_rolls)),
            Self::Reroll {
                targets,
                max_rerolls,
            } => Box::new(Reroll::new(targets.clone(), *max_rerolls)?),
        };
        Ok(mechanic)
    }
}
