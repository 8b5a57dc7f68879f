use anyhow::{Context, Result};
use clap::{self, Parser};
use fmg::{
    game::{Game, Player},
    strategy,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Report {
    opening: u32,
    moves: Vec<u32>,
    plies: usize,
    winner: Player,
}

/// Let the heuristic play both sides from a given opening claim.
#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Opening claim for Player 1, must be less than 50
    #[arg(long)]
    opening: u32,
}

pub fn run(args: Args) -> Result<()> {
    let mut game = Game::new();
    game.claim(args.opening).context("Invalid opening claim")?;
    let mut moves = vec![args.opening];
    eprintln!("Player 1 claims {}", args.opening);

    while !game.is_over() {
        let position = game.position().context("No position after the opening claim")?;
        let claim = strategy::select_move(position)
            .context("No move available in an unfinished game")?;
        let replies = strategy::opponent_replies(position, claim);
        let player = game.to_move();
        game.claim(claim).context("Heuristic selected an illegal claim")?;
        moves.push(claim);
        eprintln!("{} claims {} (leaving {} replies)", player, claim, replies);
    }

    let winner = game.winner().context("Game ended without a winner")?;
    eprintln!("Game: {}", moves.iter().join(" "));
    eprintln!("{} wins after {} plies", winner, moves.len());

    let report = Report {
        opening: args.opening,
        plies: moves.len(),
        moves,
        winner,
    };
    println!("{}", serde_json::ser::to_string(&report).unwrap());

    Ok(())
}
