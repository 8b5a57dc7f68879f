//! The game-state owner: board ownership, turn order, the opening rule, and
//! win detection, layered over the pure engine.
//!
//! [`Game`] is the only mutable state in the crate. It validates every claim
//! before applying it and reports rejections as [`IllegalClaim`] values, so
//! a front-end can show the reason instead of crashing.

use crate::{
    board::{MAX_NUMBER, NumberSet},
    position::Position,
};
use std::fmt::Display;

/// The opening claim must be strictly below this bound.
pub const OPENING_LIMIT: u32 = 50;

/// One of the two players, in move order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_repr::Serialize_repr, serde_repr::Deserialize_repr)
)]
#[repr(u8)]
pub enum Player {
    /// The player who makes the opening claim
    One = 1,
    /// The second player, the computer in human-vs-computer play
    Two = 2,
}

impl Player {
    /// Get the other player
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    const fn index(self) -> usize {
        self as usize - 1
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", *self as u8)
    }
}

/// Reason a claim was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalClaim {
    /// The game already has a winner
    GameOver,
    /// The number is not on the board
    OutOfRange(u32),
    /// The number was claimed earlier in the game
    AlreadyClaimed(u32),
    /// The opening claim must be below [`OPENING_LIMIT`]
    OpeningTooHigh(u32),
    /// The number is neither a factor nor a multiple of the last claim
    NotFactorOrMultiple {
        /// The rejected claim
        claim: u32,
        /// The number it had to relate to
        last_move: u32,
    },
}

impl Display for IllegalClaim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalClaim::GameOver => write!(f, "The game is over."),
            IllegalClaim::OutOfRange(claim) => {
                write!(f, "{} is not on the board.", claim)
            }
            IllegalClaim::AlreadyClaimed(claim) => {
                write!(f, "{} has already been claimed.", claim)
            }
            IllegalClaim::OpeningTooHigh(_) => {
                write!(f, "First move must be less than {}.", OPENING_LIMIT)
            }
            IllegalClaim::NotFactorOrMultiple { claim, last_move } => {
                write!(
                    f,
                    "Invalid move: {} is neither a factor nor a multiple of {}.",
                    claim, last_move
                )
            }
        }
    }
}

impl std::error::Error for IllegalClaim {}

/// State of one playing session.
#[derive(Debug, Clone)]
pub struct Game {
    /// Claimed numbers per player, indexed by [`Player::index`]
    claimed: [NumberSet; 2],
    last_move: Option<u32>,
    to_move: Player,
    winner: Option<Player>,
}

impl Game {
    /// Start a fresh game: empty board, Player 1 to open.
    pub const fn new() -> Self {
        Game {
            claimed: [NumberSet::empty(), NumberSet::empty()],
            last_move: None,
            to_move: Player::One,
            winner: None,
        }
    }

    /// All numbers claimed so far, by either player
    pub fn claimed(&self) -> NumberSet {
        self.claimed[Player::One.index()] | self.claimed[Player::Two.index()]
    }

    /// Who claimed `n`, if anyone
    pub fn owner(&self, n: u32) -> Option<Player> {
        if self.claimed[Player::One.index()].contains(n) {
            Some(Player::One)
        } else if self.claimed[Player::Two.index()].contains(n) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// The most recent claim, if the game has started
    pub const fn last_move(&self) -> Option<u32> {
        self.last_move
    }

    /// The player whose turn it is. Frozen on the winner once the game ends.
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// The winner, once the game has ended
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Check if the game has ended
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Engine view of the current state, once the game has started
    pub fn position(&self) -> Option<Position> {
        self.last_move
            .map(|last_move| Position::new(last_move, self.claimed()))
    }

    /// Numbers the player to move may claim right now. Before the opening
    /// this is every number below [`OPENING_LIMIT`]; afterwards it is the
    /// engine's legal move set. Empty once the game is over.
    pub fn legal_claims(&self) -> NumberSet {
        if self.is_over() {
            return NumberSet::empty();
        }
        match self.position() {
            None => NumberSet::up_to(OPENING_LIMIT - 1) - self.claimed(),
            Some(position) => position.legal_moves(),
        }
    }

    /// Claim `n` for the player to move.
    ///
    /// On success the claim is recorded and either the turn passes, or, if
    /// the opponent is left without a legal reply, the mover is declared the
    /// winner and the game ends.
    pub fn claim(&mut self, n: u32) -> Result<(), IllegalClaim> {
        if self.is_over() {
            return Err(IllegalClaim::GameOver);
        }
        if !(1..=MAX_NUMBER).contains(&n) {
            return Err(IllegalClaim::OutOfRange(n));
        }
        if self.claimed().contains(n) {
            return Err(IllegalClaim::AlreadyClaimed(n));
        }
        match self.last_move {
            None => {
                if n >= OPENING_LIMIT {
                    return Err(IllegalClaim::OpeningTooHigh(n));
                }
            }
            Some(last_move) => {
                if !Position::new(last_move, self.claimed()).is_legal(n) {
                    return Err(IllegalClaim::NotFactorOrMultiple { claim: n, last_move });
                }
            }
        }

        self.claimed[self.to_move.index()].insert(n);
        self.last_move = Some(n);

        if Position::new(n, self.claimed()).has_legal_moves() {
            self.to_move = self.to_move.opponent();
        } else {
            self.winner = Some(self.to_move);
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
