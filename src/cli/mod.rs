//! Interactive command-line front end.

pub mod args;
pub mod game;
pub mod prompt;

pub use args::Cli;
pub use game::{GameLoop, GameSummary};
pub use prompt::Prompter;
