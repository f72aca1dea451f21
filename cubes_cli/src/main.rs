use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod commands;
mod terminal;

#[derive(Subcommand, Debug)]
enum Command {
    Play(play::Args),
    Analyze(analyze::Args),
    Simulate(simulate::Args),
}

/// Cube removal game against a perfect minimax engine. Plays the classic game when run
/// without a subcommand.
#[derive(Parser)]
#[command(version)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        None => play::run(play::Args::default()),
        Some(Command::Play(args)) => play::run(args),
        Some(Command::Analyze(args)) => analyze::run(args),
        Some(Command::Simulate(args)) => simulate::run(args),
    }
}
