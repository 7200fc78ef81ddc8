//! Shared application state.

use std::fmt;
use std::sync::{Arc, Mutex};

use fateweaver_core::RandomEngine;

/// A single random stream shared by every request that does not bring its
/// own engine. Seeded and adaptive engines are stateful, so access is
/// serialized.
pub type SharedEngine = Arc<Mutex<Box<dyn RandomEngine>>>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide engine.
    pub engine: SharedEngine,
}

impl AppState {
    /// Create new application state around `engine`.
    #[must_use]
    pub fn new(engine: Box<dyn RandomEngine>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
