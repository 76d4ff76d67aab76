//! rps-rules CLI - Rock-Paper-Scissors driven by rules files.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rps_rules::catalog::RuleCatalog;
use rps_rules::cli::{Cli, GameLoop, Prompter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = cli.settings().context("failed to load settings")?;
    let catalog = RuleCatalog::scan(&settings.rules_dir)
        .with_context(|| format!("failed to list games in {}", settings.rules_dir.display()))?;

    if cli.list {
        for name in catalog.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let prompt = Prompter::new(io::stdin().lock(), io::stdout().lock());
    let summary = GameLoop::new(&catalog, &settings, prompt).run()?;
    log::info!("played {} rounds of {:?}", summary.rounds, summary.game);

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
