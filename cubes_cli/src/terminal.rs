use colored::Colorize;
use cubes::{
    driver::{Event, Observer, Verdict},
    player::Player,
    rules::RuleSet,
    seat::{Reply, Seat},
    state::GameState,
};
use log::warn;
use std::io::{self, BufRead, Stdin, Write};

/// Human sitting at the console
pub struct ConsoleSeat {
    stdin: Stdin,
}

impl ConsoleSeat {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Seat for ConsoleSeat {
    fn reply(&mut self, prompt: &str, _state: &GameState, _rules: &RuleSet) -> Reply {
        let mut stdout = io::stdout().lock();
        if let Err(err) = write!(stdout, "{}", prompt).and_then(|()| stdout.flush()) {
            warn!("Could not write prompt: {}", err);
        }

        let mut line = String::new();
        match self.stdin.lock().read_line(&mut line) {
            Ok(0) => Reply::Closed,
            Ok(_) => Reply::Line(line),
            Err(err) => {
                warn!("Could not read from stdin: {}", err);
                Reply::Closed
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audience {
    /// Second seat is the person reading the output
    Human,
    /// Both seats are programs
    Bots,
    Silent,
}

/// Prints game events to stdout with colors
pub struct ConsoleObserver {
    audience: Audience,
}

impl ConsoleObserver {
    pub const fn human() -> Self {
        Self {
            audience: Audience::Human,
        }
    }

    pub const fn bots() -> Self {
        Self {
            audience: Audience::Bots,
        }
    }

    pub const fn silent() -> Self {
        Self {
            audience: Audience::Silent,
        }
    }
}

impl Observer for ConsoleObserver {
    fn observe(&mut self, event: &Event) {
        match (self.audience, event) {
            (Audience::Silent, _) => {}
            (_, Event::Round { round, remaining }) => println!(
                "========== ROUND {} ({}) ============",
                round,
                format!("{} cubes left", remaining).cyan()
            ),
            (
                Audience::Human,
                Event::Moved {
                    player: Player::Second,
                    taken,
                    ..
                },
            ) => println!("You removed: {}.", format!("{} cube(s)", taken).red()),
            (
                _,
                Event::Moved {
                    player,
                    taken,
                    remaining,
                },
            ) => {
                println!("{} removes: {}.", player, format!("{} cube(s)", taken).red());
                println!("{}", format!("{} cubes left.", remaining).cyan());
            }
            (_, Event::Rejected { message, .. }) => println!("{}", message.yellow()),
            (_, Event::Stuck { .. }) => println!("{}", event.to_string().yellow()),
            (_, Event::GameOver(Verdict::Winner(player))) => {
                println!("{} wins!", player.name().green());
            }
            (_, Event::GameOver(Verdict::Abandoned)) => println!("{}", event),
        }
    }
}
