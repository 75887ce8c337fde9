//! Error types for port operations.

/// Repository operation errors with context for debugging.
///
/// A missing row is not an error here; lookups that may miss return `Option`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_the_operation() {
        let err = RepoError::database("find_recipe_result", "connection refused");
        assert_eq!(
            err.to_string(),
            "Database error in find_recipe_result: connection refused"
        );
    }
}
