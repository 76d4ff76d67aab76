//! Directed win relation between moves.

use rustc_hash::FxHashMap;

use crate::core::MoveId;

/// Mapping from `(winner, loser)` to the statement that justifies it.
///
/// Only the first statement for an ordered pair is kept. Iteration follows
/// declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WinRelation {
    edges: FxHashMap<(MoveId, MoveId), String>,
    order: Vec<(MoveId, MoveId)>,
}

impl WinRelation {
    /// Create an empty relation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `winner` beats `loser`.
    ///
    /// Returns `false` and leaves the relation untouched if the ordered pair
    /// is already present.
    pub fn insert(&mut self, winner: MoveId, loser: MoveId, justification: impl Into<String>) -> bool {
        let key = (winner, loser);
        if self.edges.contains_key(&key) {
            return false;
        }
        self.edges.insert(key, justification.into());
        self.order.push(key);
        true
    }

    /// Justification for `winner` beating `loser`, if that pair is defined.
    #[must_use]
    pub fn get(&self, winner: MoveId, loser: MoveId) -> Option<&str> {
        self.edges.get(&(winner, loser)).map(String::as_str)
    }

    /// Check if `winner` beats `loser`.
    #[must_use]
    pub fn contains(&self, winner: MoveId, loser: MoveId) -> bool {
        self.edges.contains_key(&(winner, loser))
    }

    /// Number of ordered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over `(winner, loser, justification)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, MoveId, &str)> {
        self.order
            .iter()
            .map(move |&(w, l)| (w, l, self.edges[&(w, l)].as_str()))
    }
}
