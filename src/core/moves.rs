//! Move identification and the insertion-ordered move set.
//!
//! ## MoveId
//!
//! Compact move identifier: the position of the move in declaration order.
//!
//! ## MoveSet
//!
//! Deduplicated, insertion-ordered sequence of move names. Names are stored
//! lower-cased and looked up case-insensitively, so "Rock" and "rock" are the
//! same move. Iteration order is first-seen order, which keeps menus stable.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Most distinct moves a [`MoveSet`] holds. Ids and counts both fit a `u16`.
pub const MAX_MOVES: usize = u16::MAX as usize;

/// Move identifier.
///
/// Indices are 0-based: the first declared move is `MoveId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MoveId(pub u16);

impl MoveId {
    /// Create a new move ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw move index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MoveId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move {}", self.0)
    }
}

/// Insertion-ordered set of move names.
///
/// ## Example
///
/// ```
/// use rps_rules::core::{MoveId, MoveSet};
///
/// let mut moves = MoveSet::new();
/// let rock = moves.insert("Rock").unwrap();
/// moves.insert("paper").unwrap();
///
/// // Case-insensitive dedup keeps the first id
/// assert_eq!(moves.insert("ROCK"), Ok(rock));
/// assert_eq!(moves.len(), 2);
/// assert_eq!(moves.name(rock), Some("rock"));
/// assert_eq!(moves.id("Paper"), Some(MoveId::new(1)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
    index: FxHashMap<String, MoveId>,
}

impl MoveSet {
    /// Create an empty move set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a move, returning its id.
    ///
    /// An already known move (case-insensitive) keeps its original id.
    /// A new move beyond [`MAX_MOVES`] fails with `TooManyMoves`.
    pub fn insert(&mut self, name: &str) -> Result<MoveId, RulesError> {
        let key = name.to_lowercase();
        if let Some(&id) = self.index.get(&key) {
            return Ok(id);
        }

        let id = u16::try_from(self.names.len())
            .ok()
            .filter(|&n| usize::from(n) < MAX_MOVES)
            .map(MoveId)
            .ok_or(RulesError::TooManyMoves { limit: MAX_MOVES })?;
        self.names.push(key.clone());
        self.index.insert(key, id);
        Ok(id)
    }

    /// Look up a move by name (case-insensitive).
    #[must_use]
    pub fn id(&self, name: &str) -> Option<MoveId> {
        match self.index.get(name) {
            Some(&id) => Some(id),
            None => self.index.get(&name.to_lowercase()).copied(),
        }
    }

    /// Get the lower-cased name of a move.
    #[must_use]
    pub fn name(&self, id: MoveId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Check if a move is part of the set (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.id(name).is_some()
    }

    /// Number of distinct moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no moves are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(id, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveId(i as u16), name.as_str()))
    }

    /// Iterate over all move ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = MoveId> {
        (0..self.names.len() as u16).map(MoveId)
    }

    /// Move names in declaration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
