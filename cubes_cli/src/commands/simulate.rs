use crate::{commands::RulesArgs, terminal::ConsoleObserver};
use anyhow::{Result, bail};
use clap::{self, Parser, ValueEnum};
use cubes::{
    driver::{Match, Verdict},
    player::Player,
    seat::{Optimal, RandomMover, Seat},
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Opponent {
    Random,
    Optimal,
}

/// Let the engine play against a bot and count the winners
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    rules: RulesArgs,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Seed of the first game, every next game uses the next seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Only print the final tally
    #[arg(long)]
    quiet: bool,
}

pub fn run(args: Args) -> Result<()> {
    if args.games == 0 {
        bail!("Nothing to simulate. Use --games N with N > 0.");
    }
    let rules = args.rules.rules()?;

    let mut first_wins = 0;
    let mut second_wins = 0;
    for game_idx in 0..args.games {
        let seed = args.seed.wrapping_add(u64::from(game_idx));
        let mut seat: Box<dyn Seat> = match args.opponent {
            Opponent::Random => Box::new(RandomMover::seeded(seed)),
            Opponent::Optimal => Box::new(Optimal),
        };
        let observer = if args.quiet {
            ConsoleObserver::silent()
        } else {
            println!("---------- GAME {} (seed {}) ----------", game_idx + 1, seed);
            ConsoleObserver::bots()
        };

        match Match::new(&rules, &mut *seat, observer).run() {
            Verdict::Winner(Player::First) => first_wins += 1,
            Verdict::Winner(Player::Second) => second_wins += 1,
            // Bots always answer while a move exists
            Verdict::Abandoned => {}
        }
    }

    println!(
        "{}: {} wins, {}: {} wins",
        Player::First,
        first_wins,
        Player::Second,
        second_wins
    );

    Ok(())
}
