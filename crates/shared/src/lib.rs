//! Anycraft Protocol - Wire types for the compose HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **No domain IDs** - use raw `i32` ids in DTOs

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{ChallengeItemData, ElementData};
pub use requests::{BaseElementsQuery, ChallengesRequest, CombineRequest};
pub use responses::{BaseElementsResponse, ChallengesResponse, CombineResponse, ErrorCode};
