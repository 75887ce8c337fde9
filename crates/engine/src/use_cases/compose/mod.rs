//! Compose use cases: base elements, combining, and challenge picks.

mod base_elements;
mod challenges;
mod combine;

pub use base_elements::ListBaseElements;
pub use challenges::{PickChallenges, CHALLENGE_COUNT};
pub use combine::{CombineElements, CombineOutcome};

use std::sync::Arc;

use crate::infrastructure::ports::{ElementRepo, RandomPort, RepoError};

/// Failures of the compose use cases.
///
/// A missing recipe is an outcome, not an error; see [`CombineOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Element store unavailable: {0}")]
    Unavailable(#[from] RepoError),
}

/// Container for compose use cases.
pub struct ComposeUseCases {
    pub base_elements: Arc<ListBaseElements>,
    pub combine: Arc<CombineElements>,
    pub challenges: Arc<PickChallenges>,
}

impl ComposeUseCases {
    pub fn new(elements: Arc<dyn ElementRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self {
            base_elements: Arc::new(ListBaseElements::new(elements.clone())),
            combine: Arc::new(CombineElements::new(elements.clone())),
            challenges: Arc::new(PickChallenges::new(elements, random)),
        }
    }
}
