use anyhow::{Context, Result};
use clap::{self, Parser};
use fmg::{position::Position, strategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    position: Position,
    claim: Option<u32>,
    opponent_replies: Option<usize>,
}

/// Pick the computer move for a position.
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

    let claim = strategy::select_move(position);
    match claim {
        Some(claim) => eprintln!(
            "Claim {} leaving the opponent {} replies",
            claim,
            strategy::opponent_replies(position, claim)
        ),
        // A lost position is a result, not an error
        None => eprintln!("No move available; the side to move has lost"),
    }

    let report = Report {
        position,
        claim,
        opponent_replies: claim.map(|claim| strategy::opponent_replies(position, claim)),
    };
    println!("{}", serde_json::ser::to_string(&report).unwrap());

    Ok(())
}
