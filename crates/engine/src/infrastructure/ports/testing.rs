//! Testability port for injecting randomness.

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform index in `[0, upper)`. Implementations return 0 when `upper` is 0.
    fn gen_index(&self, upper: usize) -> usize;
}
