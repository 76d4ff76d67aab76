//! Compiled rule set: the moves of a game and who beats whom.

use crate::core::{MoveId, MoveSet};
use crate::error::RulesError;

use super::relation::WinRelation;

/// Moves and win relation produced by compiling one rules text.
///
/// Immutable once built. A session shares it read-only across rounds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleSet {
    moves: MoveSet,
    relation: WinRelation,
}

impl RuleSet {
    /// Assemble a rule set from its parts.
    #[must_use]
    pub fn new(moves: MoveSet, relation: WinRelation) -> Self {
        Self { moves, relation }
    }

    /// The playable moves, in first-seen order.
    #[must_use]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The directed win relation.
    #[must_use]
    pub fn relation(&self) -> &WinRelation {
        &self.relation
    }

    /// Look up a move by name (case-insensitive).
    pub fn move_id(&self, name: &str) -> Result<MoveId, RulesError> {
        self.moves
            .id(name)
            .ok_or_else(|| RulesError::UnknownMove(name.to_string()))
    }

    /// Lower-cased name of a move id.
    ///
    /// Ids always come from this rule set's `MoveSet`, so an unknown id is
    /// reported as an empty name.
    #[must_use]
    pub fn move_name(&self, id: MoveId) -> &str {
        self.moves.name(id).unwrap_or_default()
    }

    /// Check if `winner` beats `loser`. Unknown names never beat anything.
    #[must_use]
    pub fn beats(&self, winner: &str, loser: &str) -> bool {
        self.justification(winner, loser).is_some()
    }

    /// Statement that makes `winner` beat `loser`, if any.
    #[must_use]
    pub fn justification(&self, winner: &str, loser: &str) -> Option<&str> {
        let w = self.moves.id(winner)?;
        let l = self.moves.id(loser)?;
        self.relation.get(w, l)
    }

    /// The kept statements, in declaration order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.relation.iter().map(|(_, _, statement)| statement)
    }

    /// Check that every pair of distinct moves is related in exactly one
    /// direction.
    ///
    /// Pairs are visited in declaration order, so the reported pair is
    /// deterministic for a given rules text.
    pub fn validate(&self) -> Result<(), RulesError> {
        let ids: Vec<MoveId> = self.moves.ids().collect();

        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let forward = self.relation.contains(a, b);
                let backward = self.relation.contains(b, a);

                if forward && backward {
                    return Err(RulesError::ConflictingRelation {
                        first: self.move_name(a).to_string(),
                        second: self.move_name(b).to_string(),
                    });
                }
                if !forward && !backward {
                    return Err(RulesError::IncompleteRuleCoverage {
                        first: self.move_name(a).to_string(),
                        second: self.move_name(b).to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
