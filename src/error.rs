//! Error types for rule compilation, rule catalogs, sessions and settings.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while compiling rules text or resolving a round.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A statement does not yield two distinct, well-formed move tokens.
    #[error("malformed rules text at statement {line} ({statement:?}): {reason}")]
    MalformedRulesText {
        /// 1-based statement index.
        line: usize,
        statement: String,
        reason: &'static str,
    },

    /// Two distinct moves have no relation in either direction.
    #[error("incomplete rule coverage: no rule relates {first:?} and {second:?}")]
    IncompleteRuleCoverage { first: String, second: String },

    /// A pair of moves is related in both directions.
    #[error("conflicting rules: {first:?} and {second:?} each beat the other")]
    ConflictingRelation { first: String, second: String },

    /// The rules text names more distinct moves than a move set can hold.
    #[error("too many moves: a rule set holds at most {limit}")]
    TooManyMoves { limit: usize },

    /// A move name that the rule set does not define.
    #[error("unknown move {0:?}")]
    UnknownMove(String),
}

/// Errors raised while listing or loading rule files.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no rule files found in {0}")]
    Empty(PathBuf),

    #[error("no rule set named {0:?}")]
    UnknownRuleSet(String),
}

/// Errors raised by a game session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Rules(#[from] RulesError),

    #[error("session is finished")]
    Finished,

    /// The NPC chooser found no move of the rule set to play.
    #[error("NPC chooser produced no move")]
    NoNpcMove,
}

/// Errors raised while loading game settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}
