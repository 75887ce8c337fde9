//! Repository port traits for element store access.

use async_trait::async_trait;
use anycraft_domain::{ChallengeCandidate, Element, ElementId, GameCode, ParentPair};

use super::error::RepoError;

// =============================================================================
// Element Store
// =============================================================================

/// Read-only access to a game's elements and recipes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ElementRepo: Send + Sync {
    /// Base elements of the game, ordered by name.
    async fn list_base_elements(&self, game: &GameCode) -> Result<Vec<Element>, RepoError>;

    /// Result of combining the pair, or `None` when no recipe matches.
    async fn find_recipe_result(
        &self,
        game: &GameCode,
        pair: ParentPair,
    ) -> Result<Option<Element>, RepoError>;

    /// Character elements of the game whose ids are not in `exclude`.
    ///
    /// An empty `exclude` filters nothing.
    async fn list_challenge_candidates(
        &self,
        game: &GameCode,
        exclude: &[ElementId],
    ) -> Result<Vec<ChallengeCandidate>, RepoError>;
}
