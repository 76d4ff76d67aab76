//! Round resolution.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::RulesError;
use crate::rules::RuleSet;

/// Result of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// One move beat the other.
    Win {
        /// Lower-cased name of the winning move.
        winner: String,
        /// The statement that decided the round, verbatim.
        justification: String,
    },
    /// Both participants picked the same move.
    Draw,
}

/// A round outcome as seen by the human participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// The winning move, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            RoundOutcome::Win { winner, .. } => Some(winner),
            RoundOutcome::Draw => None,
        }
    }

    /// The deciding statement, or `None` for a draw.
    #[must_use]
    pub fn justification(&self) -> Option<&str> {
        match self {
            RoundOutcome::Win { justification, .. } => Some(justification),
            RoundOutcome::Draw => None,
        }
    }

    /// Judge the outcome from the perspective of whoever played `human_move`.
    #[must_use]
    pub fn verdict_for(&self, human_move: &str) -> Verdict {
        match self {
            RoundOutcome::Draw => Verdict::Draw,
            RoundOutcome::Win { winner, .. } if *winner == human_move.to_lowercase() => Verdict::Win,
            RoundOutcome::Win { .. } => Verdict::Lose,
        }
    }
}

/// One played round: both moves and the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number within its session.
    pub number: u32,
    pub human_move: String,
    pub npc_move: String,
    pub outcome: RoundOutcome,
}

impl Round {
    /// The outcome from the human participant's perspective.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.outcome.verdict_for(&self.human_move)
    }
}

/// Resolve a round between a human move and an NPC move.
///
/// Moves are matched case-insensitively. Equal moves draw. Otherwise the
/// relation must define the pair in one direction; a pair it does not define
/// is an `IncompleteRuleCoverage` error, never a draw.
///
/// ```
/// use rps_rules::engine::{resolve_round, RoundOutcome};
/// use rps_rules::rules::compile;
///
/// let rules = compile("Rock breaks scissors, \nScissors cuts paper, \nPaper covers rock").unwrap();
///
/// let outcome = resolve_round(&rules, "scissors", "rock").unwrap();
/// assert_eq!(outcome.winner(), Some("rock"));
/// assert_eq!(resolve_round(&rules, "paper", "paper").unwrap(), RoundOutcome::Draw);
/// ```
pub fn resolve_round(rules: &RuleSet, human_move: &str, npc_move: &str) -> Result<RoundOutcome, RulesError> {
    let human = rules.move_id(human_move)?;
    let npc = rules.move_id(npc_move)?;

    if human == npc {
        debug!("{} vs {}: draw", rules.move_name(human), rules.move_name(npc));
        return Ok(RoundOutcome::Draw);
    }

    let (winner, justification) = if let Some(j) = rules.relation().get(human, npc) {
        (human, j)
    } else if let Some(j) = rules.relation().get(npc, human) {
        (npc, j)
    } else {
        return Err(RulesError::IncompleteRuleCoverage {
            first: rules.move_name(human).to_string(),
            second: rules.move_name(npc).to_string(),
        });
    };

    debug!(
        "{} vs {}: {} wins ({})",
        rules.move_name(human),
        rules.move_name(npc),
        rules.move_name(winner),
        justification
    );

    Ok(RoundOutcome::Win {
        winner: rules.move_name(winner).to_string(),
        justification: justification.to_string(),
    })
}
