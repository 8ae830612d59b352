//! Terminal host for Process of Elimination.
//!
//! Picks a problem (a custom word or a random one from a word list), reads
//! guesses from stdin and prints the round after every guess.

use anyhow::{Context, Result};
use ctrlc::set_handler;
use log::info;
use pico_args::Arguments;
use process_of_elimination::RoundSettings;
use std::{io, path::PathBuf};

use poe_cli::{
    config::{CliConfig, Overrides},
    session::Session,
};

const HELP: &str = "\
Play Process of Elimination in the terminal

USAGE:
  poe_cli [OPTIONS]

OPTIONS:
  --word           WORD    Problem for the first round (letters and spaces)
  --words          FILE    Word list, one problem per line  [default: env POE_WORDS_FILE or built-in list]
  --max-incorrect  N       Incorrect guesses allowed  [default: env POE_MAX_INCORRECT or 6]

FLAGS:
  --once                   Play a single round and exit
  -h, --help               Print help information

ENVIRONMENT:
  POE_WORDS_FILE           Word list path
  POE_MAX_INCORRECT        Incorrect guesses allowed per round
  RUST_LOG                 Log level (e.g., debug)
";

fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let overrides = Overrides {
        word: pargs.opt_value_from_str("--word")?,
        words_file: pargs.opt_value_from_str::<_, PathBuf>("--words")?,
        max_incorrect: pargs.opt_value_from_str("--max-incorrect")?,
        once: pargs.contains("--once"),
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("Unexpected arguments: {remaining:?}");
    }

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let config = CliConfig::from_env(overrides)?;
    let words = config.word_list().context("Failed to load word list")?;
    info!(
        "Starting session: {} problems, {} incorrect guesses allowed",
        words.len(),
        config.max_incorrect
    );

    let mut custom = config.word.clone();
    let mut rng = rand::rng();
    let next_problem = move || {
        custom
            .take()
            .or_else(|| words.choose(&mut rng).map(str::to_string))
    };

    let stdin = io::stdin();
    let mut session = Session::new(
        stdin.lock(),
        io::stdout(),
        RoundSettings::new(config.max_incorrect),
    );
    session.run(next_problem, config.once)?;

    Ok(())
}
