//! Anycraft Domain - Core types for the element-combination game.
//!
//! Everything here is a read-only view over the external element store plus
//! the one piece of real logic: uniform sampling of challenge candidates.

pub mod entities;
pub mod error;
pub mod ids;
pub mod sampling;
pub mod value_objects;

pub use entities::{ChallengeCandidate, Element};
pub use error::DomainError;
pub use ids::ElementId;
pub use sampling::sample_without_replacement;
pub use value_objects::{GameCode, ParentPair};
