//! Application state for the API server.

use std::sync::Arc;

use crate::forecast::{Clock, EntropySource, SystemClock, ThreadEntropy};

/// Shared application state.
///
/// Holds the clock and the entropy source the forecast handler draws from.
/// Both are injected via constructor; cloning only bumps the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn EntropySource>,
}

impl AppState {
    /// Create a new AppState from a clock and an entropy source.
    pub fn new(clock: impl Clock + 'static, entropy: impl EntropySource + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
            entropy: Arc::new(entropy),
        }
    }

    /// Production state: local wall clock, thread-seeded generators.
    pub fn system() -> Self {
        Self::new(SystemClock, ThreadEntropy)
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn entropy(&self) -> &dyn EntropySource {
        self.entropy.as_ref()
    }
}
