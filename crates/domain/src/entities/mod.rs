//! Domain entities - Read-only views over the external element store

mod challenge_candidate;
mod element;

pub use challenge_candidate::ChallengeCandidate;
pub use element::Element;
