//! cliordle - CLI
//!
//! Terminal word-guessing game with persistent statistics.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use cliordle::{
    commands::{SettingsUpdate, run_play, run_settings, run_stats},
    config::{Config, DEFAULT_DB_DIR},
    storage::{KeyValueStore, PlayerRepository},
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "cliordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the player store
    #[arg(long, global = true, env = "CLIORDLE_DB", default_value = DEFAULT_DB_DIR)]
    db: PathBuf,

    /// Wordlist: 'all' (default), 'answers' (answers only), or path to file
    #[arg(short = 'w', long, global = true, env = "CLIORDLE_WORDLIST", default_value = "all")]
    wordlist: String,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start a game
    Play,

    /// Change and save display/rule preferences
    Settings {
        /// Turn high-contrast colours on/off
        #[arg(
            long = "highContrast",
            value_name = "BOOL",
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        high_contrast: Option<bool>,

        /// Turn hard mode on/off
        #[arg(
            long = "hardMode",
            value_name = "BOOL",
            action = ArgAction::Set,
            num_args = 0..=1,
            default_missing_value = "true"
        )]
        hard_mode: Option<bool>,
    },

    /// Show statistics
    Stats,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::new(cli.db, &cli.wordlist);
    let result = config
        .open_store()
        .map_err(anyhow::Error::from)
        .and_then(|store| {
            run(
                cli.command,
                &config,
                store,
                io::stdin().lock(),
                io::stdout().lock(),
            )
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Load the player from `store` and dispatch one command
fn run<K: KeyValueStore>(
    command: Commands,
    config: &Config,
    store: K,
    input: impl BufRead,
    out: impl Write,
) -> Result<()> {
    let repo = PlayerRepository::new(store);
    let mut player = repo.load().context("could not load player")?;

    match command {
        Commands::Play => {
            let dictionary = config.wordlist.load()?;
            run_play(&mut player, &repo, &dictionary, input, out)?;
            Ok(())
        }
        Commands::Settings {
            high_contrast,
            hard_mode,
        } => {
            let update = SettingsUpdate {
                high_contrast,
                hard_mode,
            };
            run_settings(&mut player, &repo, update, out).context("could not save settings")
        }
        Commands::Stats => Ok(run_stats(&player, out)?),
    }
}

/// Single-line report of an error and its causes
fn error_line(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}
