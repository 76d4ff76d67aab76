//! Rules text compiler.
//!
//! Rules text is a list of dominance statements separated by `", \n"`:
//!
//! ```text
//! Rock breaks scissors,
//! Scissors cuts paper,
//! Paper covers rock
//! ```
//!
//! The first space-separated token of a statement is the winning move, the
//! last token is the losing move. Everything in between is only part of the
//! justification, which is the statement itself.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::MoveSet;
use crate::error::RulesError;

use super::relation::WinRelation;
use super::ruleset::RuleSet;

/// Separator between two statements.
pub const STATEMENT_SEPARATOR: &str = ", \n";

/// How much checking happens after the statements are parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoveragePolicy {
    /// Every pair of distinct moves must be related in exactly one direction.
    #[default]
    Strict,
    /// Only the statement syntax is checked. Gaps surface when a round hits them.
    Permissive,
}

/// Compiles rules text into a [`RuleSet`].
///
/// ```
/// use rps_rules::rules::RuleCompiler;
///
/// let rules = RuleCompiler::default()
///     .compile("Rock breaks scissors, \nScissors cuts paper, \nPaper covers rock")
///     .unwrap();
///
/// assert_eq!(rules.moves().names(), &["rock", "scissors", "paper"]);
/// assert_eq!(rules.justification("rock", "scissors"), Some("Rock breaks scissors"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleCompiler {
    policy: CoveragePolicy,
}

impl RuleCompiler {
    /// Create a compiler with the given coverage policy.
    #[must_use]
    pub fn new(policy: CoveragePolicy) -> Self {
        Self { policy }
    }

    /// Compiler that only checks statement syntax.
    #[must_use]
    pub fn permissive() -> Self {
        Self::new(CoveragePolicy::Permissive)
    }

    #[must_use]
    pub fn policy(&self) -> CoveragePolicy {
        self.policy
    }

    /// Compile a rules text.
    ///
    /// Fails on the first malformed statement. Under `Strict`, also fails if
    /// the resulting relation leaves a pair uncovered or covers it twice.
    pub fn compile(&self, text: &str) -> Result<RuleSet, RulesError> {
        let mut moves = MoveSet::new();
        let mut relation = WinRelation::new();

        for (i, statement) in text.split(STATEMENT_SEPARATOR).enumerate() {
            let (winner, loser) = endpoints(i + 1, statement)?;
            let winner = moves.insert(winner)?;
            let loser = moves.insert(loser)?;

            if !relation.insert(winner, loser, statement) {
                debug!("ignoring duplicate rule {:?}", statement);
            }
        }

        let rules = RuleSet::new(moves, relation);
        if self.policy == CoveragePolicy::Strict {
            rules.validate()?;
        }

        info!(
            "compiled {} moves and {} rules ({:?})",
            rules.moves().len(),
            rules.relation().len(),
            self.policy
        );
        Ok(rules)
    }
}

/// Compile a rules text with strict coverage checks.
pub fn compile(text: &str) -> Result<RuleSet, RulesError> {
    RuleCompiler::default().compile(text)
}

/// Extract the winning and losing move tokens of one statement.
fn endpoints(line: usize, statement: &str) -> Result<(&str, &str), RulesError> {
    let malformed = |reason| RulesError::MalformedRulesText {
        line,
        statement: statement.to_string(),
        reason,
    };

    let mut tokens = statement.split(' ');
    let (winner, loser) = match (tokens.next(), tokens.next_back()) {
        (Some(winner), Some(loser)) => (winner, loser),
        _ => return Err(malformed("expected a winning and a losing move")),
    };

    if winner.is_empty() || loser.is_empty() {
        return Err(malformed("empty move name"));
    }
    if winner.contains(char::is_whitespace) || loser.contains(char::is_whitespace) {
        return Err(malformed("move name contains whitespace"));
    }
    if winner.to_lowercase() == loser.to_lowercase() {
        return Err(malformed("a move cannot beat itself"));
    }

    Ok((winner, loser))
}
