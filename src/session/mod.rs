//! Game sessions.
//!
//! A session owns one compiled rule set, the RNG and the NPC chooser, and
//! plays any number of rounds with them. Rounds never change the rule set.
//!
//! ## Lifecycle
//!
//! `RulesLoaded -> PlayingRound (loop) -> Finished`. A finished session
//! refuses further rounds.

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState};
use crate::engine::{resolve_round, MoveChooser, Round, UniformChooser};
use crate::error::SessionError;
use crate::rules::RuleSet;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Rules compiled, no round played yet.
    RulesLoaded,
    /// At least one round played.
    PlayingRound,
    /// No more rounds.
    Finished,
}

/// One sequence of rounds under a single rule set.
pub struct Session {
    name: String,
    rules: RuleSet,
    rng: GameRng,
    chooser: Box<dyn MoveChooser>,
    phase: SessionPhase,
    rounds_played: u32,
}

impl Session {
    /// Start a session with a uniform random NPC.
    pub fn new(name: impl Into<String>, rules: RuleSet, rng: GameRng) -> Self {
        let name = name.into();
        info!(
            "session {:?} started with {} moves (seed {})",
            name,
            rules.moves().len(),
            rng.seed()
        );
        Self {
            name,
            rules,
            rng,
            chooser: Box::new(UniformChooser),
            phase: SessionPhase::RulesLoaded,
            rounds_played: 0,
        }
    }

    /// Replace the NPC chooser.
    pub fn with_chooser(mut self, chooser: impl MoveChooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Name of the rule set being played.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Rounds resolved so far. Kept in memory only.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Current RNG state, enough to replay the NPC's upcoming moves.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play one round: pick the NPC move, then resolve against `human_move`.
    pub fn play_round(&mut self, human_move: &str) -> Result<Round, SessionError> {
        if self.phase == SessionPhase::Finished {
            return Err(SessionError::Finished);
        }

        let human = self.rules.move_id(human_move)?;
        let npc = self
            .chooser
            .choose_move(&self.rules, &mut self.rng)
            .ok_or(SessionError::NoNpcMove)?;

        let human_move = self.rules.move_name(human);
        let npc_move = self.rules.move_name(npc);
        let outcome = resolve_round(&self.rules, human_move, npc_move)?;

        self.rounds_played += 1;
        self.phase = SessionPhase::PlayingRound;

        Ok(Round {
            number: self.rounds_played,
            human_move: human_move.to_string(),
            npc_move: npc_move.to_string(),
            outcome,
        })
    }

    /// End the session.
    pub fn finish(&mut self) {
        if self.phase != SessionPhase::Finished {
            info!("session {:?} finished after {} rounds", self.name, self.rounds_played);
            self.phase = SessionPhase::Finished;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RoundOutcome, ScriptedChooser, Verdict};
    use crate::error::RulesError;
    use crate::rules::{compile, RuleCompiler};

    const RPS3: &str = "Rock breaks scissors, \nScissors cuts paper, \nPaper covers rock";

    fn session(chooser: ScriptedChooser) -> Session {
        Session::new("RPS-3", compile(RPS3).unwrap(), GameRng::new(42)).with_chooser(chooser)
    }

    #[test]
    fn test_phases() {
        let mut s = session(ScriptedChooser::new(["rock"]));
        assert_eq!(s.phase(), SessionPhase::RulesLoaded);
        assert_eq!(s.name(), "RPS-3");

        s.play_round("paper").unwrap();
        assert_eq!(s.phase(), SessionPhase::PlayingRound);

        s.finish();
        assert_eq!(s.phase(), SessionPhase::Finished);
        assert_eq!(s.play_round("paper"), Err(SessionError::Finished));
        assert_eq!(s.rounds_played(), 1);
    }

    #[test]
    fn test_scripted_rounds() {
        let mut s = session(ScriptedChooser::new(["rock", "paper", "scissors"]));

        let first = s.play_round("Paper").unwrap();
        assert_eq!(first.number, 1);
        assert_eq!(first.human_move, "paper");
        assert_eq!(first.npc_move, "rock");
        assert_eq!(first.verdict(), Verdict::Win);

        let second = s.play_round("paper").unwrap();
        assert_eq!(second.outcome, RoundOutcome::Draw);

        let third = s.play_round("paper").unwrap();
        assert_eq!(third.verdict(), Verdict::Lose);
        assert_eq!(third.outcome.justification(), Some("Scissors cuts paper"));
        assert_eq!(s.rounds_played(), 3);
    }

    #[test]
    fn test_unknown_human_move() {
        let mut s = session(ScriptedChooser::new(["rock"]));
        assert_eq!(
            s.play_round("lizard"),
            Err(SessionError::Rules(RulesError::UnknownMove("lizard".to_string())))
        );
        assert_eq!(s.rounds_played(), 0);
        assert_eq!(s.phase(), SessionPhase::RulesLoaded);
    }

    #[test]
    fn test_coverage_gap_surfaces() {
        let rules = RuleCompiler::permissive()
            .compile("Rock breaks scissors, \nScissors cuts paper")
            .unwrap();
        let mut s = Session::new("gap", rules, GameRng::new(1)).with_chooser(ScriptedChooser::new(["rock"]));

        assert!(matches!(
            s.play_round("paper"),
            Err(SessionError::Rules(RulesError::IncompleteRuleCoverage { .. }))
        ));
    }

    #[test]
    fn test_chooser_without_known_moves() {
        let mut s = session(ScriptedChooser::new(["kirk", "lizard"]));
        let err = s.play_round("rock").unwrap_err();

        assert_eq!(err, SessionError::NoNpcMove);
        assert_eq!(err.to_string(), "NPC chooser produced no move");
        assert_eq!(s.rounds_played(), 0);
    }

    #[test]
    fn test_same_seed_same_npc_moves() {
        let play = |seed| {
            let mut s = Session::new("RPS-3", compile(RPS3).unwrap(), GameRng::new(seed));
            (0..20)
                .map(|_| s.play_round("rock").unwrap().npc_move)
                .collect::<Vec<_>>()
        };

        assert_eq!(play(5), play(5));
    }

    #[test]
    fn test_rng_state_replays() {
        let mut s = Session::new("RPS-3", compile(RPS3).unwrap(), GameRng::new(8));
        s.play_round("rock").unwrap();

        let state = s.rng_state();
        let mut replay = Session::new("RPS-3", compile(RPS3).unwrap(), GameRng::from_state(&state));

        for _ in 0..10 {
            assert_eq!(s.play_round("rock").unwrap().npc_move, replay.play_round("rock").unwrap().npc_move);
        }
    }
}
