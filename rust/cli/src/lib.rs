//! # holdem CLI
//!
//! Command-line tools around the `holdem-engine` crate:
//!
//! - `eval`: rank a hand of 5 to 7 cards
//! - `deal`: show one seeded deal
//! - `sim`: play hands between automated players and write the history as JSONL
//! - `replay`: re-check a JSONL history (chips, winners, seeds)
//! - `cfg`: print the resolved configuration
//!
//! Everything goes through [`run`], which takes the output streams as
//! parameters so tests can capture them.
//!
//! ```
//! let mut out = Vec::new();
//! let code = holdem_cli::run(["holdem", "eval", "AS", "KS", "QS", "JS", "TS"], &mut out, &mut std::io::sink());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```

use std::io::Write;

use clap::Parser;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
mod macros;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_replay_command,
    handle_sim_command, SimOptions,
};

pub use error::CliError;

/// Parses `args` (program name first) and runs the subcommand.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version
/// requests go to `out` and succeed.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["eval", "deal", "sim", "replay", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                write_or_exit!(out, "{}", e);
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: holdem <command> [options]\n\nCommands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Sim {
            hands,
            players,
            seed,
            output,
            verbose,
        } => handle_sim_command(
            SimOptions {
                hands,
                players,
                seed,
                output,
                verbose,
            },
            out,
            err,
        ),
        Commands::Replay { input } => handle_replay_command(&input, out, err),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
