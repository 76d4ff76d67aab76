//! Game settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::OUTCOME_BORDER;
use crate::error::ConfigError;
use crate::rules::CoveragePolicy;

/// Settings for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Directory holding the `*.txt` rules files.
    pub rules_dir: PathBuf,

    /// Rule set to play without showing the game menu.
    pub game: Option<String>,

    /// Seed for the NPC's random moves.
    /// `None` draws a fresh seed from the operating system.
    pub seed: Option<u64>,

    /// Coverage checks applied when compiling rules.
    pub policy: CoveragePolicy,

    /// Character used to frame round outcomes.
    pub border: char,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from("rules"),
            game: None,
            seed: None,
            policy: CoveragePolicy::Strict,
            border: OUTCOME_BORDER,
        }
    }
}

impl GameSettings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn with_rules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = dir.into();
        self
    }

    pub fn with_game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: CoveragePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_border(mut self, border: char) -> Self {
        self.border = border;
        self
    }
}
