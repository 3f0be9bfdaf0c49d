use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aoc2021::bit_trie::TieBreak;
use aoc2021::input::read_lines;

#[derive(Parser, Debug)]
struct Args {
    day: usize,
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Read `day{DAY}test{SAMPLE}.txt` instead of `day{DAY}.txt`
    #[arg(short, long)]
    sample: Option<u32>,
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Resolve least-common ties to '0' in day 3
    #[arg(long)]
    symmetric_ties: bool,
}

fn setup_logs() {
    let subscriber = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("AOC_LOG")
                .unwrap_or_else(|_| EnvFilter::default().add_directive("info".parse().unwrap())),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting default subscriber failed");
}

fn main() -> anyhow::Result<()> {
    setup_logs();
    let Args {day, part, sample, input, symmetric_ties} = Args::parse();

    let path = input.unwrap_or_else(|| match sample {
        Some(n) => PathBuf::from(format!("day{}test{}.txt", day, n)),
        None => PathBuf::from(format!("day{}.txt", day)),
    });
    let lines = read_lines(&path)?;
    let tie_break = if symmetric_ties {TieBreak::Symmetric} else {TieBreak::Literal};

    let time = std::time::Instant::now();
    let answer = aoc2021::solve(day, part, &lines, tie_break)
        .with_context(|| format!("day {} part {} on {}", day, part, path.display()))?;
    println!("{}", answer);
    println!("{} seconds elapsed", time.elapsed().as_secs_f32());
    Ok(())
}
