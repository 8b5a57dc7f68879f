use anyhow::{Context, Result};
use clap::{self, Parser};
use fmg::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    position: Position,
    moves: Vec<u32>,
    count: usize,
}

/// List the legal moves of a position.
#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Position in the form "12 {3, 4}": last move, then the claimed set
    #[arg(long)]
    position: String,
}

pub fn run(args: Args) -> Result<()> {
    let position = Position::from_str(&args.position)
        .ok()
        .context("Could not parse the position")?;

    let moves = position.legal_moves();
    eprintln!("Position: {}", position);
    eprintln!("Legal moves: {}", moves);

    let report = Report {
        position,
        moves: moves.iter().collect(),
        count: moves.len(),
    };
    println!("{}", serde_json::ser::to_string(&report).unwrap());

    Ok(())
}
