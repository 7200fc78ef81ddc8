//! Shared test doubles for Fateweaver engines.

mod engine;
mod entropy;

pub use engine::{FixedEngine, SequenceEngine};
pub use entropy::{FixedEntropy, SequenceEntropy};
