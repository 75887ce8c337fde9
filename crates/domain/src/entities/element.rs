//! Element entity - Anything a player can hold, combine, or discover
//!
//! Elements are reference data owned by the store. The service never creates,
//! mutates, or deletes them.

use serde::{Deserialize, Serialize};

use crate::ElementId;

/// A craftable (or starting) element of a game.
///
/// # Simple Data Struct
///
/// All fields are public because every combination of values the store can
/// hold is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub slug: String,
    pub name: String,
    pub emoji: Option<String>,
    /// Characters are the targets of challenges
    pub is_character: bool,
    /// Base elements are available to every player without crafting
    pub is_base_element: bool,
    pub image_url: Option<String>,
    pub rarity: Option<String>,
    /// Difficulty rank (higher is harder)
    pub difficulty: Option<i32>,
}

impl Element {
    pub fn new(id: ElementId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            emoji: None,
            is_character: false,
            is_base_element: false,
            image_url: None,
            rarity: None,
            difficulty: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn as_base_element(mut self) -> Self {
        self.is_base_element = true;
        self
    }
}
