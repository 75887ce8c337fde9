use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Public code identifying a game (e.g. `"anycraft"`).
///
/// Every lookup is scoped to one game, so a blank code is never valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameCode(String);

impl GameCode {
    /// Create a new validated game code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the code is empty after trimming.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("missing game_code"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GameCode {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GameCode> for String {
    fn from(code: GameCode) -> String {
        code.0
    }
}
