//! Rule compiler and round engine tests.
//!
//! Covers the documented scenarios and property tests over generated
//! tournaments of 2-8 moves.

use proptest::prelude::*;

use rps_rules::engine::{resolve_round, RoundOutcome};
use rps_rules::error::RulesError;
use rps_rules::rules::{compile, RuleCompiler, RuleSet};

const RPS3: &str = "Rock breaks scissors, \nScissors cuts paper, \nPaper covers rock";

// =============================================================================
// Scenarios
// =============================================================================

/// RPS-3: moves come out in first-seen order and rock beats scissors.
#[test]
fn test_rps3_rock_beats_scissors() {
    let rules = compile(RPS3).unwrap();

    let mut moves: Vec<_> = rules.moves().names().to_vec();
    assert_eq!(moves, vec!["rock", "scissors", "paper"]);
    moves.sort();
    assert_eq!(moves, vec!["paper", "rock", "scissors"]);

    assert_eq!(
        resolve_round(&rules, "rock", "scissors").unwrap(),
        RoundOutcome::Win {
            winner: "rock".to_string(),
            justification: "Rock breaks scissors".to_string(),
        }
    );
}

/// Same move on both sides is a draw.
#[test]
fn test_rps3_paper_draw() {
    let rules = compile(RPS3).unwrap();
    assert_eq!(resolve_round(&rules, "paper", "paper").unwrap(), RoundOutcome::Draw);
}

/// The winner does not depend on who played which move.
#[test]
fn test_rps3_order_independent() {
    let rules = compile(RPS3).unwrap();
    assert_eq!(
        resolve_round(&rules, "scissors", "rock").unwrap(),
        RoundOutcome::Win {
            winner: "rock".to_string(),
            justification: "Rock breaks scissors".to_string(),
        }
    );
}

/// A statement without a verb still yields first and last tokens.
#[test]
fn test_two_token_statement() {
    let rules = compile("Rock scissors").unwrap();

    assert_eq!(rules.moves().names(), &["rock", "scissors"]);
    assert_eq!(rules.justification("rock", "scissors"), Some("Rock scissors"));
    assert_eq!(
        resolve_round(&rules, "scissors", "rock").unwrap().winner(),
        Some("rock")
    );
}

/// A rule set covering 2 of 3 pairs fails on the missing pair.
#[test]
fn test_incomplete_coverage_at_resolution() {
    let rules = RuleCompiler::permissive()
        .compile("Rock breaks scissors, \nScissors cuts paper")
        .unwrap();

    assert!(resolve_round(&rules, "rock", "scissors").is_ok());
    assert!(resolve_round(&rules, "scissors", "paper").is_ok());
    assert_eq!(
        resolve_round(&rules, "rock", "paper"),
        Err(RulesError::IncompleteRuleCoverage {
            first: "rock".to_string(),
            second: "paper".to_string(),
        })
    );
}

/// Strict compilation reports the same gap up front.
#[test]
fn test_incomplete_coverage_at_compile_time() {
    let err = compile("Rock breaks scissors, \nScissors cuts paper").unwrap_err();
    assert!(matches!(err, RulesError::IncompleteRuleCoverage { .. }));
}

/// Malformed statements name their position.
#[test]
fn test_malformed_statement_position() {
    let err = compile("Rock breaks scissors, \nPaper, \nPaper covers rock").unwrap_err();
    match err {
        RulesError::MalformedRulesText { line, statement, .. } => {
            assert_eq!(line, 2);
            assert_eq!(statement, "Paper");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

// =============================================================================
// Properties
// =============================================================================

const VERBS: [&str; 4] = ["beats", "crushes", "covers", "eats up"];

/// A generated tournament: the rules text and its statements per ordered pair.
#[derive(Debug, Clone)]
struct Tournament {
    text: String,
    moves: Vec<String>,
    /// `(winner index, loser index, statement)`
    statements: Vec<(usize, usize, String)>,
}

fn tournament() -> impl Strategy<Value = Tournament> {
    (2usize..=8)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(any::<bool>(), n * (n - 1) / 2),
                prop::collection::vec(any::<bool>(), n),
            )
        })
        .prop_map(|(n, flips, capitalized)| {
            let display = |i: usize| {
                if capitalized[i] {
                    format!("Move{}", i)
                } else {
                    format!("move{}", i)
                }
            };

            let mut statements = Vec::new();
            let mut k = 0;
            for i in 0..n {
                for j in i + 1..n {
                    let (w, l) = if flips[k] { (j, i) } else { (i, j) };
                    let statement = format!("{} {} {}", display(w), VERBS[k % VERBS.len()], display(l));
                    statements.push((w, l, statement));
                    k += 1;
                }
            }

            let text = statements
                .iter()
                .map(|(_, _, s)| s.as_str())
                .collect::<Vec<_>>()
                .join(", \n");

            Tournament {
                text,
                moves: (0..n).map(|i| format!("move{}", i)).collect(),
                statements,
            }
        })
}

fn winner(rules: &RuleSet, a: &str, b: &str) -> Option<String> {
    resolve_round(rules, a, b).unwrap().winner().map(str::to_string)
}

proptest! {
    #[test]
    fn prop_resolution_is_symmetric(t in tournament()) {
        let rules = compile(&t.text).unwrap();
        for a in &t.moves {
            for b in &t.moves {
                prop_assert_eq!(winner(&rules, a, b), winner(&rules, b, a));
            }
        }
    }

    #[test]
    fn prop_compile_is_idempotent(t in tournament()) {
        prop_assert_eq!(compile(&t.text).unwrap(), compile(&t.text).unwrap());
    }

    #[test]
    fn prop_statements_keep_declaration_order(t in tournament()) {
        let rules = compile(&t.text).unwrap();
        let expected: Vec<&str> = t.statements.iter().map(|(_, _, s)| s.as_str()).collect();
        prop_assert_eq!(rules.statements().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_same_move_draws(t in tournament()) {
        let rules = compile(&t.text).unwrap();
        for m in &t.moves {
            prop_assert_eq!(resolve_round(&rules, m, m).unwrap(), RoundOutcome::Draw);
        }
    }

    #[test]
    fn prop_justification_is_the_statement(t in tournament()) {
        let rules = compile(&t.text).unwrap();
        for (w, l, statement) in &t.statements {
            let outcome = resolve_round(&rules, &t.moves[*l], &t.moves[*w]).unwrap();
            prop_assert_eq!(outcome.winner(), Some(t.moves[*w].as_str()));
            prop_assert_eq!(outcome.justification(), Some(statement.as_str()));
        }
    }

    #[test]
    fn prop_duplicates_are_ignored(t in tournament()) {
        let original = compile(&t.text).unwrap();

        let mut text = t.text.clone();
        for (w, l, _) in &t.statements {
            text.push_str(&format!(", \n{} also beats {}", t.moves[*w], t.moves[*l]));
        }

        prop_assert_eq!(compile(&text).unwrap(), original);
    }
}
