//! Interactive session loop.
//!
//! Reads commands line by line and renders each round as plain text. Input
//! and output are generic so sessions can be scripted in tests.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use process_of_elimination::{Round, RoundError, RoundSettings, RoundView, Status};
use std::io::{BufRead, Write};

use crate::commands::{COMMANDS_HELP, Command, parse_command};

/// How a single round ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// The player quit or input ran out before the round finished.
    Abandoned,
    /// The problem couldn't be played, e.g. it has no letters.
    Skipped,
}

/// Rounds played during a session.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionSummary {
    pub won: u32,
    pub lost: u32,
    pub abandoned: u32,
    pub skipped: u32,
}

impl SessionSummary {
    fn record(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::Won => self.won += 1,
            RoundOutcome::Lost => self.lost += 1,
            RoundOutcome::Abandoned => self.abandoned += 1,
            RoundOutcome::Skipped => self.skipped += 1,
        }
    }
}

pub struct Session<R, W> {
    input: R,
    output: W,
    settings: RoundSettings,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: RoundSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Play rounds until the player declines another one, quits, input runs
    /// out, or `next_problem` has nothing left. `next_problem` is called once
    /// per round.
    pub fn run<F>(&mut self, mut next_problem: F, once: bool) -> Result<SessionSummary>
    where
        F: FnMut() -> Option<String>,
    {
        let mut summary = SessionSummary::default();

        while let Some(problem) = next_problem() {
            let outcome = self.play_round(&problem)?;
            summary.record(outcome);

            if outcome == RoundOutcome::Skipped && !once {
                continue;
            }
            if once || outcome == RoundOutcome::Abandoned || !self.play_again()? {
                break;
            }
        }

        info!(
            "session over: {} won, {} lost, {} abandoned, {} skipped",
            summary.won, summary.lost, summary.abandoned, summary.skipped
        );
        writeln!(
            self.output,
            "\nThanks for playing! Won {}, lost {}.",
            summary.won, summary.lost
        )?;
        Ok(summary)
    }

    /// Play one round of `problem` to completion. A problem the engine
    /// rejects is reported and skipped; only IO failures are errors.
    pub fn play_round(&mut self, problem: &str) -> Result<RoundOutcome> {
        let mut round = match Round::with_settings(problem, &self.settings) {
            Ok(round) => round,
            Err(e) => {
                warn!("skipping problem {problem:?}: {e}");
                writeln!(self.output, "Can't play this problem ({e}), skipping it.")?;
                return Ok(RoundOutcome::Skipped);
            }
        };

        writeln!(self.output, "New problem! Guess one character at a time.")?;
        self.render(&round.current_state())?;

        loop {
            let Some(line) = self.prompt("guess> ")? else {
                return Ok(RoundOutcome::Abandoned);
            };

            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            debug!("command: {command:?}");

            match command {
                Command::Guess(letter) => match round.guess(letter) {
                    Ok(view) => {
                        self.render(&view)?;
                        match view.status {
                            Status::Won => {
                                self.announce("Solved it!", &view)?;
                                return Ok(RoundOutcome::Won);
                            }
                            Status::Lost => {
                                self.announce("Out of guesses.", &view)?;
                                return Ok(RoundOutcome::Lost);
                            }
                            Status::Waiting | Status::Playing => {}
                        }
                    }
                    Err(RoundError::DuplicateGuess(c)) => {
                        writeln!(self.output, "You already guessed '{c}'.")?;
                    }
                    Err(e) => writeln!(self.output, "{e}")?,
                },
                Command::State => self.render(&round.current_state())?,
                Command::Help => write!(self.output, "{COMMANDS_HELP}")?,
                Command::Quit => {
                    info!(
                        "round abandoned after {} guesses",
                        round.guessed_letters().len()
                    );
                    return Ok(RoundOutcome::Abandoned);
                }
            }
        }
    }

    fn render(&mut self, view: &RoundView) -> Result<()> {
        writeln!(self.output, "\n{view}")?;
        writeln!(
            self.output,
            "{} incorrect guesses left",
            view.remaining_incorrect()
        )?;
        Ok(())
    }

    fn announce(&mut self, headline: &str, view: &RoundView) -> Result<()> {
        let solution = view.solution.as_deref().unwrap_or_default();
        writeln!(self.output, "{headline} The problem was: {solution}")?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? [y/N] ")?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        ))
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
