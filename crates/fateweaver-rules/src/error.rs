//! Rules error types.

use fateweaver_core::{EngineError, RangeError};
use thiserror::Error;

/// Errors raised while configuring or resolving a roll.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RulesError {
    /// The engine rejected a draw.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The roll was bound to an invalid range.
    #[error(transparent)]
    InvalidRange(#[from] RangeError),

    /// A reroll mechanic was configured without any target values.
    #[error("reroll targets cannot be empty")]
    EmptyRerollTargets,

    /// A reroll mechanic was configured with a zero reroll budget.
    #[error("max reroll count must be a positive integer, got {0}")]
    InvalidRerollCount(u32),

    /// A mechanic kept drawing past its roll limit.
    #[error("too many dice rolled: exceeded {limit} rolls")]
    TooManyRolls {
        /// The configured limit.
        limit: usize,
    },
}
