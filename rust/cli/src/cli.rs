//! Argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "holdem", version, about = "Texas Hold'em engine tools")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank a hand of 5 to 7 cards, e.g. `holdem eval AS KS QS JS TS`
    Eval {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Show the hole cards and board of one seeded deal
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
    },
    /// Play hands between simple automated players
    Sim {
        #[arg(long, default_value_t = 100)]
        hands: u32,
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=9))]
        players: u8,
        #[arg(long)]
        seed: Option<u64>,
        /// JSONL hand history to write
        #[arg(long)]
        output: Option<PathBuf>,
        /// Log every action to stderr
        #[arg(long)]
        verbose: bool,
    },
    /// Re-check the rounds of a JSONL hand history
    Replay {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
