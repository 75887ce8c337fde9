use crate::ids::ElementId;

/// The two parents of a recipe.
///
/// Recipes are unordered: the pair is normalized so `first <= second`, which
/// makes `(a, b)` and `(b, a)` the same key. Both parents may be the same
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParentPair {
    first: ElementId,
    second: ElementId,
}

impl ParentPair {
    pub fn new(a: ElementId, b: ElementId) -> Self {
        Self {
            first: a.min(b),
            second: a.max(b),
        }
    }

    /// The smaller id of the pair.
    pub fn first(&self) -> ElementId {
        self.first
    }

    /// The larger id of the pair.
    pub fn second(&self) -> ElementId {
        self.second
    }
}
