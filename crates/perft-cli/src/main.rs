//! Perft driver - counts leaf nodes of the legal move tree.
//!
//! Runs a single position given on the command line, or every position of a
//! TOML suite, and reports node counts against their expected values.

mod config;

use anyhow::Context;
use chess_rules::movegen::perft::{perft, perft_divide};
use chess_rules::BoardState;
use clap::Parser;
use config::{PositionConfig, Suite};
use std::path::PathBuf;
use std::time::Instant;

/// Perft - counts legal move tree leaves.
#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Counts leaf nodes of the legal move tree")]
struct Args {
    /// Position in FEN notation (defaults to the starting position)
    #[arg(long)]
    fen: Option<String>,

    /// Search depth
    #[arg(long, default_value = "3")]
    depth: u32,

    /// Print the node count below each root move
    #[arg(long)]
    divide: bool,

    /// Run every position listed in a TOML suite file
    #[arg(long, conflicts_with_all = ["fen", "divide"])]
    suite: Option<PathBuf>,
}

/// Outcome of counting one suite position.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    nodes: u64,
    matches: bool,
}

fn load_position(fen: Option<&str>) -> anyhow::Result<BoardState> {
    match fen {
        Some(fen) => BoardState::from_fen(fen).with_context(|| format!("bad position {:?}", fen)),
        None => Ok(BoardState::new_game()),
    }
}

fn run_position(position: &PositionConfig) -> anyhow::Result<Report> {
    let state = load_position(Some(position.fen.as_str()))
        .with_context(|| format!("suite position {:?}", position.name))?;
    let nodes = perft(&state, position.depth);
    Ok(Report {
        nodes,
        matches: position.expected.map_or(true, |expected| expected == nodes),
    })
}

fn run_suite(suite: &Suite) -> anyhow::Result<()> {
    let mut failures = 0;
    for position in &suite.positions {
        let start = Instant::now();
        let report = run_position(position)?;
        let status = if report.matches { "ok" } else { "MISMATCH" };
        println!(
            "{:<20} depth {} nodes {:>12} {:>8.3}s {}",
            position.name,
            position.depth,
            report.nodes,
            start.elapsed().as_secs_f64(),
            status
        );
        if !report.matches {
            tracing::warn!(
                "{}: expected {:?}, got {}",
                position.name,
                position.expected,
                report.nodes
            );
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{} of {} positions mismatched", failures, suite.positions.len());
    }
    Ok(())
}

fn run_single(state: &BoardState, depth: u32, divide: bool) {
    println!("{}\n", state);
    let start = Instant::now();
    let nodes = if divide {
        let results = perft_divide(state, depth);
        for (uci, count) in &results {
            println!("{}: {}", uci, count);
        }
        println!();
        results.iter().map(|(_, n)| n).sum::<u64>()
    } else {
        perft(state, depth)
    };
    let elapsed = start.elapsed().as_secs_f64();
    println!("Nodes: {}", nodes);
    println!("Time: {:.3}s", elapsed);
    if elapsed > 0.0 {
        println!("NPS: {:.0}", nodes as f64 / elapsed);
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    if let Some(path) = &args.suite {
        tracing::info!("Loading suite {:?}", path);
        let suite = Suite::load(path)?;
        return run_suite(&suite);
    }

    let state = load_position(args.fen.as_deref())?;
    tracing::info!("Running perft to depth {}", args.depth);
    run_single(&state, args.depth, args.divide);
    Ok(())
}
