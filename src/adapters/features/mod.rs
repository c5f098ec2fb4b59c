//! Restricted Feature Adapters

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::RestrictedFeatures;

/// Hook that only records the activation in the log.
#[derive(Debug, Default)]
pub struct LoggingRestrictedFeatures {
    activations: AtomicUsize,
}

impl LoggingRestrictedFeatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the hook has fired.
    pub fn activations(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }
}

impl RestrictedFeatures for LoggingRestrictedFeatures {
    fn enable(&self) {
        self.activations.fetch_add(1, Ordering::SeqCst);
        tracing::info!("Age-restricted features enabled");
    }
}
