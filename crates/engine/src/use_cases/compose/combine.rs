//! Combine use case - resolves a pair of elements through the recipe table.

use std::sync::Arc;

use anycraft_domain::{Element, ElementId, GameCode, ParentPair};

use super::ComposeError;
use crate::infrastructure::ports::ElementRepo;

/// What combining two elements produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineOutcome {
    /// A recipe matched; carries the resulting element
    Created(Element),
    /// No recipe exists for the pair
    NoRecipe,
}

/// Looks up the recipe for an unordered pair of parents.
pub struct CombineElements {
    elements: Arc<dyn ElementRepo>,
}

impl CombineElements {
    pub fn new(elements: Arc<dyn ElementRepo>) -> Self {
        Self { elements }
    }

    /// Combine `a` and `b`. Argument order never changes the outcome.
    pub async fn execute(
        &self,
        game: &GameCode,
        a: ElementId,
        b: ElementId,
    ) -> Result<CombineOutcome, ComposeError> {
        let pair = ParentPair::new(a, b);
        let result = self.elements.find_recipe_result(game, pair).await?;

        Ok(match result {
            Some(element) => {
                tracing::debug!(
                    game = %game,
                    parent_a = %pair.first(),
                    parent_b = %pair.second(),
                    result = %element.id,
                    "Recipe matched"
                );
                CombineOutcome::Created(element)
            }
            None => {
                tracing::debug!(
                    game = %game,
                    parent_a = %pair.first(),
                    parent_b = %pair.second(),
                    "No recipe for pair"
                );
                CombineOutcome::NoRecipe
            }
        })
    }
}
