//! Human-facing outcome messages.

use super::round::{RoundOutcome, Verdict};

/// Default border character for outcome messages.
pub const OUTCOME_BORDER: char = '=';

/// Message announcing `outcome` to the player of `human_move`.
///
/// ```
/// use rps_rules::engine::{outcome_message, RoundOutcome};
///
/// let outcome = RoundOutcome::Win {
///     winner: "rock".to_string(),
///     justification: "Rock breaks scissors".to_string(),
/// };
/// assert_eq!(outcome_message(&outcome, "rock"), "You win! Rock breaks scissors");
/// assert_eq!(outcome_message(&outcome, "scissors"), "You lose! Rock breaks scissors");
/// assert_eq!(outcome_message(&RoundOutcome::Draw, "rock"), "Draw!");
/// ```
#[must_use]
pub fn outcome_message(outcome: &RoundOutcome, human_move: &str) -> String {
    let justification = outcome.justification().unwrap_or_default();
    match outcome.verdict_for(human_move) {
        Verdict::Win => format!("You win! {}", justification),
        Verdict::Lose => format!("You lose! {}", justification),
        Verdict::Draw => "Draw!".to_string(),
    }
}

/// Frame a message with a line of `border` above and below.
///
/// Each border line is as long as the message, counted in characters.
#[must_use]
pub fn bordered(message: &str, border: char) -> String {
    let line: String = std::iter::repeat(border).take(message.chars().count()).collect();
    format!("{line}\n{message}\n{line}")
}
