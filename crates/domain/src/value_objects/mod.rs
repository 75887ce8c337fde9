//! Value objects - Immutable objects defined by their attributes

mod game_code;
mod parent_pair;

pub use game_code::GameCode;
pub use parent_pair::ParentPair;
