//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::config::GameSettings;
use crate::error::ConfigError;
use crate::rules::CoveragePolicy;

/// Play Rock-Paper-Scissors with rules read from text files.
#[derive(Parser, Debug)]
#[command(name = "rps-rules")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the *.txt rules files [default: rules].
    #[arg(long)]
    pub rules_dir: Option<PathBuf>,

    /// Play this rule set without showing the game menu (e.g. RPS-5).
    #[arg(long)]
    pub game: Option<String>,

    /// Seed for the computer's moves, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only check statement syntax; coverage gaps fail when a round hits them.
    #[arg(long)]
    pub permissive: bool,

    /// JSON settings file. Command-line flags take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List the available games and exit.
    #[arg(long)]
    pub list: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Settings from the optional config file, overridden by flags.
    pub fn settings(&self) -> Result<GameSettings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => GameSettings::from_json_file(path)?,
            None => GameSettings::default(),
        };

        if let Some(dir) = &self.rules_dir {
            settings.rules_dir = dir.clone();
        }
        if let Some(game) = &self.game {
            settings.game = Some(game.clone());
        }
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if self.permissive {
            settings.policy = CoveragePolicy::Permissive;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rps-rules"]);
        assert_eq!(cli.settings().unwrap(), GameSettings::default());
        assert!(!cli.list);
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::parse_from([
            "rps-rules",
            "--rules-dir",
            "custom",
            "--game",
            "RPS-7",
            "--seed",
            "99",
            "--permissive",
            "-v",
        ]);
        let settings = cli.settings().unwrap();

        assert!(cli.verbose);
        assert_eq!(settings.rules_dir, PathBuf::from("custom"));
        assert_eq!(settings.game.as_deref(), Some("RPS-7"));
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.policy, CoveragePolicy::Permissive);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r##"{"seed": 1, "game": "RPS-3", "border": "#"}"##).unwrap();

        let cli = Cli::parse_from(["rps-rules", "--config", path.to_str().unwrap(), "--seed", "2"]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.seed, Some(2));
        assert_eq!(settings.game.as_deref(), Some("RPS-3"));
        assert_eq!(settings.border, '#');
    }
}
