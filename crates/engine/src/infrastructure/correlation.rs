//! Request ids for access logging.

use std::fmt;
use uuid::Uuid;

/// Correlation ID for tracking a request through the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a new correlation ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short format (first 8 characters) for logging.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = CorrelationId::new();
        let id2 = CorrelationId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_short_format_is_8_chars() {
        let id = CorrelationId::new();
        assert_eq!(id.short().len(), 8);
    }

    #[test]
    fn test_display_format() {
        let id = CorrelationId::new();
        // UUID format: 8-4-4-4-12 hex chars with dashes
        assert_eq!(id.to_string().len(), 36);
    }
}
