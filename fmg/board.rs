//! The board domain: numbers 1 through 100 and sets of them.

use crate::{
    display,
    parsing::{Parser, impl_from_str_via_parser, lexeme, try_option},
};
use auto_ops::impl_op_ex;
use std::fmt::Display;

/// Largest number on the board.
pub const MAX_NUMBER: u32 = 100;

/// Internal representation of a set of board numbers
type SetBits = u128;

const FULL: SetBits = (1 << MAX_NUMBER) - 1;

/// Set of board numbers in `1..=`[`MAX_NUMBER`], stored as a bit mask.
///
/// Union, intersection, and difference are overloaded to `|`, `&`, and `-`.
/// Iteration yields elements in ascending numeric order; the move selection
/// scan relies on that order for its tie-break.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NumberSet(SetBits);

impl NumberSet {
    /// Set with no elements
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Set of the whole board, `1..=`[`MAX_NUMBER`]
    pub const fn full() -> Self {
        Self(FULL)
    }

    /// Set of a single number
    pub const fn singleton(n: u32) -> Self {
        let mut res = Self::empty();
        res.insert(n);
        res
    }

    /// Set of all numbers from 1 up to and including `n`
    pub const fn up_to(n: u32) -> Self {
        debug_assert!(n <= MAX_NUMBER);
        Self((1 << n) - 1)
    }

    /// Check if `n` is an element. Numbers outside the board are never elements.
    pub const fn contains(self, n: u32) -> bool {
        n >= 1 && n <= MAX_NUMBER && (self.0 >> (n - 1)) & 1 == 1
    }

    /// Add `n` to the set
    pub const fn insert(&mut self, n: u32) {
        debug_assert!(n >= 1 && n <= MAX_NUMBER);
        self.0 |= 1 << (n - 1);
    }

    /// Set with `n` added
    #[must_use]
    pub const fn with(mut self, n: u32) -> Self {
        self.insert(n);
        self
    }

    /// Number of elements
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set has no elements
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate elements in ascending order
    pub const fn iter(self) -> NumberSetIter {
        NumberSetIter(self.0)
    }

    pub(crate) fn parse(parser: Parser<'_>) -> Option<(Parser<'_>, Self)> {
        let mut parser = try_option!(parser.parse_ascii_char('{'));
        let mut res = Self::empty();
        while let Some((p, n)) = lexeme!(parser, Parser::parse_u32) {
            if !(1..=MAX_NUMBER).contains(&n) {
                return None;
            }
            res.insert(n);
            match p.parse_ascii_char(',') {
                Some(p) => parser = p,
                None => {
                    parser = p;
                    break;
                }
            }
        }
        let parser = try_option!(parser.trim_whitespace().parse_ascii_char('}'));
        Some((parser, res))
    }
}

// Union
impl_op_ex!(| |lhs: &NumberSet, rhs: &NumberSet| -> NumberSet { NumberSet(lhs.0 | rhs.0) });
impl_op_ex!(|= |lhs: &mut NumberSet, rhs: &NumberSet| { lhs.0 |= rhs.0 });

// Intersection
impl_op_ex!(& |lhs: &NumberSet, rhs: &NumberSet| -> NumberSet { NumberSet(lhs.0 & rhs.0) });

// Set difference, not numeric subtraction
impl_op_ex!(- |lhs: &NumberSet, rhs: &NumberSet| -> NumberSet { NumberSet(lhs.0 & !rhs.0) });

impl FromIterator<u32> for NumberSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut res = Self::empty();
        for n in iter {
            res.insert(n);
        }
        res
    }
}

impl IntoIterator for NumberSet {
    type Item = u32;
    type IntoIter = NumberSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for NumberSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let elems = self.iter().collect::<Vec<u32>>();
        display::braces(f, |f| display::commas(f, &elems))
    }
}

impl_from_str_via_parser!(NumberSet);

/// Ascending iterator over a [`NumberSet`]
#[derive(Debug, Clone)]
pub struct NumberSetIter(SetBits);

impl Iterator for NumberSetIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            let n = self.0.trailing_zeros() + 1;
            // clear the lowest set bit
            self.0 &= self.0 - 1;
            Some(n)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for NumberSetIter {}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for NumberSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        NumberSet(u128::arbitrary(g) & FULL)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let this = *self;
        Box::new(this.iter().map(move |n| NumberSet(this.0 & !(1 << (n - 1)))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;
    use std::str::FromStr;

    #[test]
    fn insert_and_contains() {
        let mut set = NumberSet::empty();
        assert!(set.is_empty());
        set.insert(7);
        set.insert(100);
        set.insert(7);
        assert!(set.contains(7));
        assert!(set.contains(100));
        assert!(!set.contains(8));
        assert!(!set.contains(0));
        assert!(!set.contains(101));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn constructors() {
        assert_eq!(NumberSet::full().len(), 100);
        assert_eq!(NumberSet::singleton(42).iter().collect::<Vec<u32>>(), vec![42]);
        assert_eq!(
            NumberSet::up_to(5),
            [1, 2, 3, 4, 5].into_iter().collect::<NumberSet>()
        );
        assert_eq!(NumberSet::up_to(0), NumberSet::empty());
        assert_eq!(NumberSet::up_to(MAX_NUMBER), NumberSet::full());
    }

    #[test]
    fn set_algebra() {
        let lhs = [1, 2, 3, 50].into_iter().collect::<NumberSet>();
        let rhs = [2, 50, 99].into_iter().collect::<NumberSet>();

        assert_eq!(lhs | rhs, [1, 2, 3, 50, 99].into_iter().collect::<NumberSet>());
        assert_eq!(lhs & rhs, [2, 50].into_iter().collect::<NumberSet>());
        assert_eq!(lhs - rhs, [1, 3].into_iter().collect::<NumberSet>());
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set = [50, 3, 97, 4].into_iter().collect::<NumberSet>();
        assert_eq!(set.iter().collect::<Vec<u32>>(), vec![3, 4, 50, 97]);

        let mut qc = QuickCheck::new();
        let test = |set: NumberSet| {
            let elems = set.iter().collect::<Vec<u32>>();
            assert_eq!(elems.len(), set.len());
            assert!(elems.is_sorted());
            assert!(elems.iter().all(|&n| set.contains(n)));
        };
        qc.quickcheck(test as fn(NumberSet));
    }

    #[test]
    fn display() {
        assert_eq!(NumberSet::empty().to_string(), "{}");
        assert_eq!(
            [8, 2, 4].into_iter().collect::<NumberSet>().to_string(),
            "{2, 4, 8}"
        );
    }

    #[test]
    fn parsing_preserves_equality() {
        assert_eq!(
            NumberSet::from_str("{2, 4, 8}").unwrap(),
            [2, 4, 8].into_iter().collect::<NumberSet>()
        );
        assert_eq!(NumberSet::from_str("{}").unwrap(), NumberSet::empty());
        assert!(NumberSet::from_str("{0}").is_err());
        assert!(NumberSet::from_str("{101}").is_err());
        assert!(NumberSet::from_str("{1, 2").is_err());

        let mut qc = QuickCheck::new();
        let test = |set: NumberSet| {
            assert_eq!(NumberSet::from_str(&set.to_string()).unwrap(), set);
        };
        qc.quickcheck(test as fn(NumberSet));
    }
}
