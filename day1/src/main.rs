use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use day1::{logger, read_input, solve, Pairing};
use log::LevelFilter;

/// Total distance and similarity score of two lists of location ids.
#[derive(Parser)]
#[command(name = "day1", version)]
struct Opts {
    /// File with two whitespace-separated integers per line.
    #[arg(env = "DAY1_INPUT", default_value = "input/day1.txt")]
    input: PathBuf,
    /// Reject lines that don't hold exactly two values.
    #[arg(long)]
    strict: bool,
    /// More log output on stderr, repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Opts {
    fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn pairing(&self) -> Pairing {
        if self.strict {
            Pairing::Strict
        } else {
            Pairing::Alternate
        }
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    logger::init(opts.level()).context("failed to install logger")?;
    let (left, right) = read_input(&opts.input, opts.pairing())
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let answer = solve(left, right);
    println!("{answer}");
    Ok(())
}
