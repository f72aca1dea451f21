use crate::commands::RulesArgs;
use anyhow::{Context, Result, bail};
use clap::{self, Parser};
use cubes::analysis::{PositionReport, analyze};

/// Solve every starting pile in a range, one JSON report per line
#[derive(Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    rules: RulesArgs,

    /// Smallest starting pile
    #[arg(long, default_value_t = 0)]
    start_n: u32,

    /// Largest starting pile
    #[arg(long, default_value_t = 30)]
    end_n: u32,
}

pub fn run(args: Args) -> Result<()> {
    if args.start_n > args.end_n {
        bail!(
            "Empty range: --start-n {} is above --end-n {}",
            args.start_n,
            args.end_n
        );
    }
    let rules = args.rules.rules()?;

    for report in analyze(&rules, args.start_n..=args.end_n) {
        println!("{}", report_line(&report)?);
    }

    Ok(())
}

fn report_line(report: &PositionReport) -> Result<String> {
    serde_json::ser::to_string(report).context("Could not serialize report")
}
