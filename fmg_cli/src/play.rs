use anyhow::Result;
use clap::{self, Parser, ValueEnum};
use fmg::{
    game::{Game, OPENING_LIMIT, Player},
    strategy,
};
use std::{
    fmt::Write as _,
    io::{BufRead, Write as _},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    Computer,
    Human,
}

/// Play an interactive game on the terminal.
#[derive(Debug, Clone, Parser)]
pub struct Args {
    /// Who plays as Player 2
    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    opponent: Opponent,
}

fn player_name(opponent: Opponent, player: Player) -> &'static str {
    match (opponent, player) {
        (Opponent::Computer, Player::Two) => "Computer",
        (_, Player::One) => "Player 1",
        (Opponent::Human, Player::Two) => "Player 2",
    }
}

/// Render the 10x10 board. Claims are marked `+` (Player 1) and `x`
/// (Player 2), the last move with `<`.
fn render_board(game: &Game) -> String {
    let mut board = String::new();
    for row in 0..10 {
        for col in 1..=10u32 {
            let n = row * 10 + col;
            let mark = match game.owner(n) {
                Some(Player::One) => '+',
                Some(Player::Two) => 'x',
                None => ' ',
            };
            let last = if game.last_move() == Some(n) { '<' } else { ' ' };
            let _ = write!(board, "{:>4}{}{}", n, mark, last);
        }
        board.push('\n');
    }
    board
}

pub fn run(args: Args) -> Result<()> {
    let mut game = Game::new();
    let stdin = std::io::stdin();
    let mut input = String::new();

    println!("{}", render_board(&game));
    println!(
        "Player 1, select a number less than {} to start.",
        OPENING_LIMIT
    );

    loop {
        if let Some(winner) = game.winner() {
            println!(
                "{} wins! No more moves for {}.",
                player_name(args.opponent, winner),
                player_name(args.opponent, winner.opponent())
            );
            return Ok(());
        }

        let to_move = game.to_move();

        // The computer plays second and the game is never over here, so a
        // position and a move always exist on its turn.
        if args.opponent == Opponent::Computer
            && to_move == Player::Two
            && let Some(position) = game.position()
            && let Some(claim) = strategy::select_move(position)
        {
            let _ = game.claim(claim);
            println!("Computer claims {}.", claim);
            println!("{}", render_board(&game));
            if !game.is_over() {
                println!("Your turn. Pick a factor or multiple of {}.", claim);
            }
            continue;
        }

        println!(
            "{} to move. Legal claims: {}",
            player_name(args.opponent, to_move),
            game.legal_claims()
        );
        print!("> ");
        std::io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            // EOF
            return Ok(());
        }
        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            return Ok(());
        }
        let Ok(claim) = line.parse::<u32>() else {
            println!("Enter a number between 1 and 100, or 'quit'.");
            continue;
        };

        match game.claim(claim) {
            Ok(()) => {
                println!("{}", render_board(&game));
                if !game.is_over() && args.opponent == Opponent::Human {
                    println!(
                        "{}'s turn. Pick a factor or multiple of {}.",
                        player_name(args.opponent, game.to_move()),
                        claim
                    );
                }
            }
            Err(reason) => println!("{}", reason),
        }
    }
}
