//! Fateweaver — roll mechanics and the roll orchestrator.
//!
//! Mechanics aggregate one or more engine draws into a single logical roll
//! (advantage, exploding dice, rerolls, ...). The orchestrator binds an
//! engine, a mechanic and a fixed range, and applies a modifier. Both only
//! ever talk to engines through the `RandomEngine` contract.

pub mod error;
pub mod mechanic;
pub mod roll;

pub use error::RulesError;
pub use mechanic::{Mechanic, MechanicConfig, MechanicOutcome};
pub use roll::{Roll, RollOutcome, resolve_roll};
