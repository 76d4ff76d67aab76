//! Interactive game loop.
//!
//! ```text
//! ChoosingGame -> RulesLoaded -> PlayingRound (loop) -> Finished
//! ```
//!
//! `PlayingRound` repeats while the player answers "y" to the continuation
//! prompt. End of input at any prompt moves straight to `Finished`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::catalog::{RuleCatalog, RuleSource};
use crate::config::GameSettings;
use crate::core::GameRng;
use crate::engine::{bordered, outcome_message, MoveChooser};
use crate::rules::RuleCompiler;
use crate::session::Session;

use super::prompt::Prompter;

/// Orchestrator states.
enum Stage {
    ChoosingGame,
    RulesLoaded(Session),
    PlayingRound(Session),
    Finished(Option<Session>),
}

/// What a finished game loop did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// The rule set played, if one was chosen.
    pub game: Option<String>,
    pub rounds: u32,
}

/// Drives one game from rule selection to the last round.
pub struct GameLoop<'a, R, W> {
    catalog: &'a RuleCatalog,
    settings: &'a GameSettings,
    prompt: Prompter<R, W>,
    chooser: Option<Box<dyn MoveChooser>>,
}

impl<'a, R: BufRead, W: Write> GameLoop<'a, R, W> {
    pub fn new(catalog: &'a RuleCatalog, settings: &'a GameSettings, prompt: Prompter<R, W>) -> Self {
        Self {
            catalog,
            settings,
            prompt,
            chooser: None,
        }
    }

    /// Use `chooser` for the NPC instead of uniform random moves.
    pub fn with_chooser(mut self, chooser: impl MoveChooser + 'static) -> Self {
        self.chooser = Some(Box::new(chooser));
        self
    }

    /// Give back the prompter, e.g. to inspect its output.
    pub fn into_prompter(self) -> Prompter<R, W> {
        self.prompt
    }

    /// Run until the player stops or input ends.
    pub fn run(&mut self) -> Result<GameSummary> {
        let mut stage = Stage::ChoosingGame;

        loop {
            stage = match stage {
                Stage::ChoosingGame => match self.choose_game()? {
                    Some(source) => Stage::RulesLoaded(self.load(&source)?),
                    None => Stage::Finished(None),
                },
                Stage::RulesLoaded(mut session) => {
                    if self.play_round(&mut session)? {
                        Stage::PlayingRound(session)
                    } else {
                        Stage::Finished(Some(session))
                    }
                }
                Stage::PlayingRound(mut session) => {
                    let again = self.prompt.confirm("\nPlay another round? Y/N: ")?;
                    if again == Some(true) && self.play_round(&mut session)? {
                        Stage::PlayingRound(session)
                    } else {
                        Stage::Finished(Some(session))
                    }
                }
                Stage::Finished(session) => {
                    return Ok(match session {
                        Some(mut session) => {
                            session.finish();
                            GameSummary {
                                game: Some(session.name().to_string()),
                                rounds: session.rounds_played(),
                            }
                        }
                        None => GameSummary {
                            game: None,
                            rounds: 0,
                        },
                    });
                }
            };
        }
    }

    fn choose_game(&mut self) -> Result<Option<RuleSource>> {
        if let Some(name) = &self.settings.game {
            return Ok(Some(self.catalog.find(name)?.clone()));
        }

        self.prompt.menu("Available games:", self.catalog.names())?;
        let question = format!("Choose a game (1 to {}): ", self.catalog.len());
        let choice = self.prompt.choose_index(&question, self.catalog.len())?;
        Ok(choice.map(|i| self.catalog.sources()[i].clone()))
    }

    fn load(&mut self, source: &RuleSource) -> Result<Session> {
        let text = self.catalog.load(source)?;

        let out = self.prompt.out();
        writeln!(out)?;
        writeln!(out, "--- Game Rules: ---")?;
        writeln!(out, "{}", text)?;

        let rules = RuleCompiler::new(self.settings.policy)
            .compile(&text)
            .with_context(|| format!("invalid rules in {}", source.path.display()))?;

        let rng = GameRng::from_seed_or_entropy(self.settings.seed);
        let session = Session::new(source.name.clone(), rules, rng);
        Ok(match self.chooser.take() {
            Some(chooser) => session.with_chooser(chooser),
            None => session,
        })
    }

    /// Play one round. Returns `false` if input ended before a move was chosen.
    fn play_round(&mut self, session: &mut Session) -> Result<bool> {
        let moves = session.rules().moves().names().to_vec();
        self.prompt.menu("Available options:", &moves)?;

        let Some(choice) = self.prompt.choose_index("\nYour choice: ", moves.len())? else {
            return Ok(false);
        };

        let round = session.play_round(&moves[choice])?;
        debug!("round {}: {:?}", round.number, round.outcome);

        let message = outcome_message(&round.outcome, &round.human_move);
        let out = self.prompt.out();
        writeln!(out, "Computer plays: {}", round.npc_move)?;
        writeln!(out, "{}", bordered(&message, self.settings.border))?;
        Ok(true)
    }
}
