//! List base elements use case - the starting hand of a game.

use std::sync::Arc;

use anycraft_domain::{Element, GameCode};

use super::ComposeError;
use crate::infrastructure::ports::ElementRepo;

/// Lists the base elements of a game, ordered by name.
pub struct ListBaseElements {
    elements: Arc<dyn ElementRepo>,
}

impl ListBaseElements {
    pub fn new(elements: Arc<dyn ElementRepo>) -> Self {
        Self { elements }
    }

    pub async fn execute(&self, game: &GameCode) -> Result<Vec<Element>, ComposeError> {
        let elements = self.elements.list_base_elements(game).await?;
        tracing::debug!(game = %game, count = elements.len(), "Listed base elements");
        Ok(elements)
    }
}
