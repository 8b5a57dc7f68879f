//! Number-theory utilities: divisor and multiple enumeration over the board.

use crate::board::{MAX_NUMBER, NumberSet};

/// All numbers that divide `n` evenly, including 1 and `n` itself.
///
/// Trial division runs only up to `√n`; each hit contributes the pair `i` and
/// `n / i`, and the set absorbs the duplicate when `n` is a perfect square.
/// `divisors(0)` is the empty set.
pub fn divisors(n: u32) -> NumberSet {
    debug_assert!(n <= MAX_NUMBER);
    let mut res = NumberSet::empty();
    for i in 1..=n.isqrt() {
        if n % i == 0 {
            res.insert(i);
            res.insert(n / i);
        }
    }
    res
}

/// Multiples of `n` strictly greater than `n` up to and including `limit`,
/// in increasing order: `2n, 3n, …`.
///
/// `multiples(0, _)` is empty; so is any `n > limit / 2`.
pub fn multiples(n: u32, limit: u32) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }

    let mut res = Vec::with_capacity((limit / n).saturating_sub(1) as usize);
    let mut m = n * 2;
    while m <= limit {
        res.push(m);
        m += n;
    }
    res
}
