//! Round engine: resolves rounds and reports them.
//!
//! - `round`: outcome types and `resolve_round`
//! - `policy`: NPC move choosers (uniform random, scripted)
//! - `report`: outcome messages and bordered output

pub mod policy;
pub mod report;
pub mod round;

pub use policy::{MoveChooser, ScriptedChooser, UniformChooser};
pub use report::{bordered, outcome_message, OUTCOME_BORDER};
pub use round::{resolve_round, Round, RoundOutcome, Verdict};
