//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{ElementRepo, RandomPort};
use crate::use_cases::ComposeUseCases;

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub compose: ComposeUseCases,
}

impl App {
    /// Wire use cases from the injected ports.
    pub fn new(elements: Arc<dyn ElementRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            use_cases: UseCases {
                compose: ComposeUseCases::new(elements, random),
            },
        }
    }
}
