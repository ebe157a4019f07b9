//! Regular numbers (also called Hamming or 5-smooth numbers): positive
//! integers of the form `2^a * 3^b * 5^c`.
//!
//! The sequence is produced by a three-way merge. Each prime keeps a cursor
//! into the numbers generated so far, and the next number is the smallest of
//! `prime * sequence[cursor]` over the three primes. Every cursor whose
//! candidate equals that minimum advances, which is what keeps values such as
//! `6 = 2 * 3 = 3 * 2` from appearing twice.
//!
//! With `u64` arithmetic the last representable term is the 13282nd,
//! `18432000000000000000`. Use [`nth_regular_big`] beyond that.

use std::iter::FusedIterator;

use log::{debug, warn};
use num_bigint::BigUint;
use num_traits::One;

use crate::error::{Error, Result};

const PRIMES: [u64; 3] = [2, 3, 5];

/// Lazily yields the regular numbers in ascending order, starting at 1.
///
/// The iterator ends once the next term would overflow `u64`.
///
/// # Examples
///
/// ```
/// use regular_kadane::number::RegularNumbers;
///
/// let first: Vec<u64> = RegularNumbers::new().take(10).collect();
/// assert_eq!(first, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 12]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegularNumbers {
    sequence: Vec<u64>,
    cursors: [usize; 3],
    exhausted: bool,
}

impl RegularNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and records the next term, or `None` on overflow.
    fn advance(&mut self) -> Option<u64> {
        if self.sequence.is_empty() {
            self.sequence.push(1);
            return Some(1);
        }

        // An overflowed candidate is larger than anything a u64 can hold,
        // so it can simply be left out of the minimum.
        let candidates: [Option<u64>; 3] =
            std::array::from_fn(|i| PRIMES[i].checked_mul(self.sequence[self.cursors[i]]));
        let next = candidates.iter().flatten().copied().min()?;

        for (cursor, candidate) in self.cursors.iter_mut().zip(candidates) {
            if candidate == Some(next) {
                *cursor += 1;
            }
        }
        self.sequence.push(next);
        Some(next)
    }
}

impl Iterator for RegularNumbers {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.exhausted {
            return None;
        }
        let next = self.advance();
        if next.is_none() {
            self.exhausted = true;
            debug!(
                "regular number generation stopped after {} terms, cursors {:?}",
                self.sequence.len(),
                self.cursors
            );
        }
        next
    }
}

impl FusedIterator for RegularNumbers {}

/// Returns the first `n` regular numbers in ascending order.
///
/// `n == 0` gives an empty vector. Fails with [`Error::Overflow`] if the
/// `n`th term does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use regular_kadane::number::regular_numbers;
///
/// assert_eq!(regular_numbers(7).unwrap(), vec![1, 2, 3, 4, 5, 6, 8]);
/// assert!(regular_numbers(0).unwrap().is_empty());
/// ```
pub fn regular_numbers(n: usize) -> Result<Vec<u64>> {
    let sequence: Vec<u64> = RegularNumbers::new().take(n).collect();
    if sequence.len() < n {
        warn!(
            "requested {} regular numbers but only {} fit in u64",
            n,
            sequence.len()
        );
        return Err(Error::Overflow { n });
    }
    Ok(sequence)
}

/// Returns the `n`th regular number, 1-indexed (`nth_regular(1) == 1`).
///
/// # Errors
///
/// * [`Error::InvalidInput`] if `n == 0`.
/// * [`Error::Overflow`] if the value does not fit in a `u64` (any `n > 13282`).
///
/// # Examples
///
/// ```
/// use regular_kadane::number::nth_regular;
///
/// assert_eq!(nth_regular(7).unwrap(), 8);
/// assert_eq!(nth_regular(12689).unwrap(), 9_183_300_480_000_000_000);
/// assert!(nth_regular(0).is_err());
/// ```
pub fn nth_regular(n: usize) -> Result<u64> {
    if n == 0 {
        return Err(Error::InvalidInput(
            "regular numbers are 1-indexed, n must be at least 1".to_string(),
        ));
    }

    let value = regular_numbers(n)?
        .last()
        .copied()
        .ok_or(Error::Overflow { n })?;
    debug!("regular number #{} = {}", n, value);
    Ok(value)
}

/// Arbitrary-precision version of [`nth_regular`]. Never overflows.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use regular_kadane::number::nth_regular_big;
///
/// // The first term past u64::MAX is exactly 2^64.
/// assert_eq!(nth_regular_big(13283).unwrap(), BigUint::from(2u8).pow(64));
/// ```
pub fn nth_regular_big(n: usize) -> Result<BigUint> {
    if n == 0 {
        return Err(Error::InvalidInput(
            "regular numbers are 1-indexed, n must be at least 1".to_string(),
        ));
    }

    let mut sequence: Vec<BigUint> = Vec::with_capacity(n);
    sequence.push(BigUint::one());
    let mut cursors = [0_usize; 3];

    for _ in 1..n {
        let candidates: [BigUint; 3] =
            std::array::from_fn(|i| &sequence[cursors[i]] * PRIMES[i]);
        let next = candidates[1..]
            .iter()
            .fold(&candidates[0], std::cmp::min)
            .clone();

        for (cursor, candidate) in cursors.iter_mut().zip(&candidates) {
            if *candidate == next {
                *cursor += 1;
            }
        }
        sequence.push(next);
    }

    debug!("big regular number #{} computed, cursors {:?}", n, cursors);
    Ok(sequence.swap_remove(n - 1))
}

/// Returns `true` if `value` has no prime factors other than 2, 3 and 5.
///
/// Zero is not a regular number.
pub fn is_regular(value: u64) -> bool {
    if value == 0 {
        return false;
    }
    let mut rest = value;
    for prime in PRIMES {
        while rest % prime == 0 {
            rest /= prime;
        }
    }
    rest == 1
}
