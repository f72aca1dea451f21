use crate::{
    commands::RulesArgs,
    terminal::{ConsoleObserver, ConsoleSeat},
};
use anyhow::Result;
use clap::{self, Parser};
use cubes::driver::Match;
use log::info;

/// Play against the engine on the console. The engine moves first.
#[derive(Parser, Debug, Default)]
pub struct Args {
    #[command(flatten)]
    rules: RulesArgs,

    /// Print without ANSI colors
    #[arg(long)]
    no_color: bool,
}

pub fn run(args: Args) -> Result<()> {
    let rules = args.rules.rules()?;
    if args.no_color {
        colored::control::set_override(false);
    }
    info!("Starting {}", rules);

    let mut game = Match::new(&rules, ConsoleSeat::new(), ConsoleObserver::human());
    let verdict = game.run();
    info!("Finished: {:?}", verdict);

    Ok(())
}
