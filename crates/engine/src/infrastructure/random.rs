//! Random index source backed by the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// System random - draws from `OsRng` on every call.
///
/// No seeding and no shared state, so concurrent requests never contend.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn gen_index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        OsRng.gen_range(0..upper)
    }
}
