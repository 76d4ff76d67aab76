//! NPC move selection.
//!
//! Choosers are trait-based so a session can be driven by any strategy:
//! - `UniformChooser`: uniform random over the move set (the default)
//! - `ScriptedChooser`: replays a fixed list of moves, for tests and demos

use crate::core::{GameRng, MoveId};
use crate::rules::RuleSet;

/// Strategy for picking the NPC's move each round.
pub trait MoveChooser {
    /// Choose a move from `rules`.
    ///
    /// Returns `None` if the chooser finds no move of `rules` to play.
    fn choose_move(&mut self, rules: &RuleSet, rng: &mut GameRng) -> Option<MoveId>;
}

impl<C: MoveChooser + ?Sized> MoveChooser for Box<C> {
    fn choose_move(&mut self, rules: &RuleSet, rng: &mut GameRng) -> Option<MoveId> {
        (**self).choose_move(rules, rng)
    }
}

/// Uniform random chooser.
///
/// Every move is equally likely, independently of previous rounds.
#[derive(Clone, Debug, Default)]
pub struct UniformChooser;

impl MoveChooser for UniformChooser {
    fn choose_move(&mut self, rules: &RuleSet, rng: &mut GameRng) -> Option<MoveId> {
        let count = rules.moves().len();
        if count == 0 {
            return None;
        }
        let idx = rng.gen_range_usize(0..count);
        Some(MoveId(idx as u16))
    }
}

/// Chooser that plays a fixed sequence of move names, cycling when exhausted.
///
/// Names missing from the rule set are skipped.
#[derive(Clone, Debug)]
pub struct ScriptedChooser {
    script: Vec<String>,
    cursor: usize,
}

impl ScriptedChooser {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: moves.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }
}

impl MoveChooser for ScriptedChooser {
    fn choose_move(&mut self, rules: &RuleSet, _rng: &mut GameRng) -> Option<MoveId> {
        for _ in 0..self.script.len() {
            let name = &self.script[self.cursor % self.script.len()];
            self.cursor += 1;
            if let Some(id) = rules.moves().id(name) {
                return Some(id);
            }
        }
        None
    }
}
