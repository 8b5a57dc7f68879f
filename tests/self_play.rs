use fmg::{
    board::MAX_NUMBER,
    game::{Game, OPENING_LIMIT, Player},
    strategy,
};

/// Play the heuristic against itself from the given opening and return the
/// finished game together with the number of plies played.
fn play_out(opening: u32) -> (Game, u32) {
    let mut game = Game::new();
    game.claim(opening).unwrap();
    let mut plies = 1;
    while !game.is_over() {
        let position = game.position().unwrap();
        let claim = strategy::select_move(position).unwrap();
        assert!(position.is_legal(claim));
        game.claim(claim).unwrap();
        plies += 1;
        assert!(plies <= MAX_NUMBER, "claimed more numbers than the board holds");
    }
    (game, plies)
}

#[test]
fn every_opening_plays_out_to_a_winner() {
    for opening in 1..OPENING_LIMIT {
        let (game, plies) = play_out(opening);
        assert!(game.winner().is_some(), "opening {} never finished", opening);
        assert_eq!(game.claimed().len(), plies as usize);
        assert!(game.legal_claims().is_empty());
    }
}

#[test]
fn the_winner_made_the_last_claim() {
    for opening in 1..OPENING_LIMIT {
        let (game, _) = play_out(opening);
        let winner = game.winner().unwrap();
        let last = game.last_move().unwrap();
        assert_eq!(game.owner(last), Some(winner));
        // the turn indicator freezes on the winner
        assert_eq!(game.to_move(), winner);
    }
}

#[test]
fn known_finish_is_reproduced() {
    // 47 -> 94 -> 1 -> 97 ends the game in four plies
    let mut game = Game::new();
    for claim in [47, 94, 1, 97] {
        game.claim(claim).unwrap();
    }
    assert_eq!(game.winner(), Some(Player::Two));
}
