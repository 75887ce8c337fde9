//! Pick challenges use case - undiscovered characters for the player to hunt.

use std::sync::Arc;

use anycraft_domain::{sample_without_replacement, ChallengeCandidate, ElementId, GameCode};

use super::ComposeError;
use crate::infrastructure::ports::{ElementRepo, RandomPort};

/// Challenges offered per request.
pub const CHALLENGE_COUNT: usize = 2;

/// Picks up to [`CHALLENGE_COUNT`] undiscovered characters at random.
pub struct PickChallenges {
    elements: Arc<dyn ElementRepo>,
    random: Arc<dyn RandomPort>,
}

impl PickChallenges {
    pub fn new(elements: Arc<dyn ElementRepo>, random: Arc<dyn RandomPort>) -> Self {
        Self { elements, random }
    }

    /// Sample from the characters of `game` not listed in `discovered`.
    ///
    /// Fewer than [`CHALLENGE_COUNT`] remaining means all of them are returned.
    pub async fn execute(
        &self,
        game: &GameCode,
        discovered: &[ElementId],
    ) -> Result<Vec<ChallengeCandidate>, ComposeError> {
        let candidates = self
            .elements
            .list_challenge_candidates(game, discovered)
            .await?;

        let picked = sample_without_replacement(&candidates, CHALLENGE_COUNT, |n| {
            self.random.gen_index(n)
        });

        tracing::debug!(
            game = %game,
            discovered = discovered.len(),
            candidates = candidates.len(),
            picked = picked.len(),
            "Picked challenges"
        );
        Ok(picked)
    }
}
