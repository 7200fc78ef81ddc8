//! Concrete sampling strategies.

mod adaptive;
mod seeded;
mod uniform;
mod weighted;

pub use adaptive::{AdaptiveBiasConfig, AdaptiveBiasStrategy, HistoryWindow, OutcomeClass};
pub use seeded::SeededLcgStrategy;
pub use uniform::UniformStrategy;
pub use weighted::{CumulativeDistribution, WeightTable, WeightedDiscreteStrategy};
