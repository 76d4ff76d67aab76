//! # rps-rules
//!
//! Generalized Rock-Paper-Scissors where the moves and who beats whom come
//! entirely from a rules text.
//!
//! ## Design Principles
//!
//! 1. **Rules-Agnostic**: No hardcoded moves. RPS-3, RPS-5 (Lizard, Spock),
//!    RPS-7 and anything else are plain text files.
//!
//! 2. **Explicit Failures**: Malformed statements and coverage gaps are named
//!    errors, never silent draws.
//!
//! 3. **Injectable Randomness**: The NPC draws from a seedable `GameRng`
//!    through a `MoveChooser`, so games replay exactly.
//!
//! ## Modules
//!
//! - `core`: Move ids, the insertion-ordered move set, RNG
//! - `rules`: Rule compiler, win relation, coverage policy
//! - `engine`: Round resolution, NPC choosers, outcome messages
//! - `session`: Rounds under one compiled rule set
//! - `catalog`: Rules files on disk
//! - `config`: Game settings
//! - `cli`: Interactive front end

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, MoveId, MoveSet};

pub use crate::rules::{compile, CoveragePolicy, RuleCompiler, RuleSet, WinRelation};

pub use crate::engine::{
    bordered, outcome_message, resolve_round, MoveChooser, Round, RoundOutcome, ScriptedChooser,
    UniformChooser, Verdict,
};

pub use crate::session::{Session, SessionPhase};

pub use crate::catalog::{RuleCatalog, RuleSource};

pub use crate::config::GameSettings;

pub use crate::error::{CatalogError, ConfigError, RulesError, SessionError};
