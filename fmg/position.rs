//! A move-engine position: the last claimed number together with the numbers
//! already claimed by either side.
//!
//! `Position` is a plain value and every method on it is a pure function;
//! nothing here mutates the claimed set or performs I/O. The opening claim,
//! when no last move exists yet, is entirely the caller's business — the
//! engine has no special first-move logic.

use crate::{
    board::{MAX_NUMBER, NumberSet},
    numeric,
    parsing::{Parser, impl_from_str_via_parser, lexeme, try_option},
};
use std::fmt::Display;

/// The engine's view of a game after at least one claim.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Position {
    last_move: u32,
    claimed: NumberSet,
}

impl Position {
    /// Create a new position. `last_move` must lie in `1..=`[`MAX_NUMBER`];
    /// `claimed` does not have to contain it.
    pub const fn new(last_move: u32, claimed: NumberSet) -> Self {
        debug_assert!(last_move >= 1 && last_move <= MAX_NUMBER);
        Position { last_move, claimed }
    }

    /// Get the most recently claimed number
    pub const fn last_move(self) -> u32 {
        self.last_move
    }

    /// Get the set of already claimed numbers
    pub const fn claimed(self) -> NumberSet {
        self.claimed
    }

    /// Set of legal next claims: factors and multiples of the last move,
    /// without the last move itself and without everything already claimed.
    ///
    /// An empty result means the side to move has lost; it is ordinary data,
    /// not an error.
    pub fn legal_moves(self) -> NumberSet {
        let pool = numeric::divisors(self.last_move)
            | numeric::multiples(self.last_move, MAX_NUMBER)
                .into_iter()
                .collect::<NumberSet>();
        pool - (self.claimed | NumberSet::singleton(self.last_move))
    }

    /// Check if `claim` would be a legal next move
    pub fn is_legal(self, claim: u32) -> bool {
        self.legal_moves().contains(claim)
    }

    /// Check if any legal move remains
    pub fn has_legal_moves(self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// Position after claiming `claim`. Does not check legality.
    #[must_use]
    pub const fn after(self, claim: u32) -> Self {
        Position {
            last_move: claim,
            claimed: self.claimed.with(claim),
        }
    }

    fn parse(parser: Parser<'_>) -> Option<(Parser<'_>, Self)> {
        let (parser, last_move) = try_option!(lexeme!(parser, Parser::parse_u32));
        if !(1..=MAX_NUMBER).contains(&last_move) {
            return None;
        }
        match lexeme!(parser, NumberSet::parse) {
            Some((parser, claimed)) => Some((parser, Position::new(last_move, claimed))),
            None => Some((parser, Position::new(last_move, NumberSet::empty()))),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.last_move, self.claimed)
    }
}

impl_from_str_via_parser!(Position);

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        let last_move = u32::arbitrary(g) % MAX_NUMBER + 1;
        Position::new(last_move, NumberSet::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let last_move = self.last_move;
        Box::new(
            self.claimed
                .shrink()
                .map(move |claimed| Position::new(last_move, claimed)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;
    use std::str::FromStr;

    #[test]
    fn moves_from_twelve_on_a_fresh_board() {
        let position = Position::new(12, NumberSet::empty());
        assert_eq!(
            position.legal_moves(),
            [1, 2, 3, 4, 6, 24, 36, 48, 60, 72, 84, 96]
                .into_iter()
                .collect::<NumberSet>()
        );
    }

    #[test]
    fn claimed_multiples_are_excluded() {
        let position = Position::new(7, [14, 21].into_iter().collect());
        assert_eq!(
            position.legal_moves(),
            [1, 28, 35, 42, 49, 56, 63, 70, 77, 84, 91, 98]
                .into_iter()
                .collect::<NumberSet>()
        );
    }

    #[test]
    fn large_prime_only_reaches_one() {
        let position = Position::new(97, NumberSet::empty());
        assert_eq!(position.legal_moves(), NumberSet::singleton(1));
    }

    #[test]
    fn one_reaches_the_whole_unclaimed_board() {
        let position = Position::new(1, NumberSet::singleton(1));
        assert_eq!(
            position.legal_moves(),
            NumberSet::full() - NumberSet::singleton(1)
        );
    }

    #[test]
    fn dead_position_has_no_moves() {
        let position = Position::new(97, NumberSet::singleton(1));
        assert!(!position.has_legal_moves());
        assert_eq!(position.legal_moves(), NumberSet::empty());
    }

    #[test]
    fn legal_moves_match_the_set_identity() {
        let mut qc = QuickCheck::new();
        let test = |position: Position| {
            let legal = position.legal_moves();
            let last = position.last_move();
            let claimed = position.claimed();

            assert_eq!(legal & claimed, NumberSet::empty());
            assert!(!legal.contains(last));

            let pool = crate::numeric::divisors(last)
                | crate::numeric::multiples(last, MAX_NUMBER)
                    .into_iter()
                    .collect::<NumberSet>();
            assert_eq!(legal, pool - (claimed | NumberSet::singleton(last)));
        };
        qc.quickcheck(test as fn(Position));
    }

    #[test]
    fn after_adds_the_claim() {
        let position = Position::new(12, NumberSet::singleton(12));
        let next = position.after(24);
        assert_eq!(next.last_move(), 24);
        assert_eq!(next.claimed(), [12, 24].into_iter().collect::<NumberSet>());
        // the original is untouched
        assert_eq!(position.claimed(), NumberSet::singleton(12));
    }

    #[test]
    fn parsing_preserves_equality() {
        assert_eq!(
            Position::from_str("12 {3, 4}").unwrap(),
            Position::new(12, [3, 4].into_iter().collect())
        );
        assert_eq!(
            Position::from_str("12").unwrap(),
            Position::new(12, NumberSet::empty())
        );
        assert!(Position::from_str("0 {}").is_err());
        assert!(Position::from_str("101").is_err());

        let mut qc = QuickCheck::new();
        let test = |position: Position| {
            assert_eq!(Position::from_str(&position.to_string()).unwrap(), position);
        };
        qc.quickcheck(test as fn(Position));
    }
}
