//! Rule compiler: turns rules text into moves and a win relation.
//!
//! - `compiler`: statement parsing and the coverage policy
//! - `relation`: the directed `(winner, loser) -> justification` map
//! - `ruleset`: the compiled, read-only result

pub mod compiler;
pub mod relation;
pub mod ruleset;

pub use compiler::{compile, CoveragePolicy, RuleCompiler, STATEMENT_SEPARATOR};
pub use relation::WinRelation;
pub use ruleset::RuleSet;
