use anyhow::Result;
use clap::{self, Parser, Subcommand};

mod best;
mod moves;
mod play;
mod selfplay;

#[derive(Subcommand, Debug)]
enum Command {
    Moves(moves::Args),
    Best(best::Args),
    Play(play::Args),
    Selfplay(selfplay::Args),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Moves(args) => moves::run(args),
        Command::Best(args) => best::run(args),
        Command::Play(args) => play::run(args),
        Command::Selfplay(args) => selfplay::run(args),
    }
}
