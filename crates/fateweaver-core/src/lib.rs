//! Fateweaver Core — random engine abstraction.
//!
//! This crate defines the engine contract every strategy implements, the
//! range validation and scaling rules shared by all of them, and the four
//! concrete sampling strategies. It contains no I/O.

pub mod config;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod strategy;

pub use engine::{RandomEngine, RangeRequest, scale_to_range};
pub use error::{EngineError, RangeError};
