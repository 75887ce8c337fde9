use serde::{Deserialize, Serialize};

use crate::ElementId;

/// A character element the player has not discovered yet.
///
/// Only the fields a challenge card needs are carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChallengeCandidate {
    pub id: ElementId,
    pub name: String,
    pub image_url: Option<String>,
}

impl ChallengeCandidate {
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: None,
        }
    }
}
