use std::ops::Range;

use log::debug;

/// A contiguous run of a slice together with its sum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subarray {
    /// Sum of the elements in `range`.
    pub sum: i64,
    /// Half-open index range into the input slice. Empty when the best
    /// choice is the empty subarray.
    pub range: Range<usize>,
}

/// Kadane's algorithm for the maximum contiguous subarray sum of a slice of `i32`.
///
/// The empty subarray is always a candidate, so the result is never negative:
/// an empty slice, or one whose elements are all negative, yields `0`.
/// Sums are accumulated in `i64`.
///
/// # Examples
///
/// ```
/// use regular_kadane::dynamic::max_subarray_sum;
///
/// let arr = [-2, 1, -3, 4, -1, 2, 1, -5, 4];
/// assert_eq!(max_subarray_sum(&arr), 6); // [4, -1, 2, 1]
/// assert_eq!(max_subarray_sum(&[-1, -2, -3]), 0);
/// ```
pub fn max_subarray_sum(values: &[i32]) -> i64 {
    let mut best_total = 0_i64;
    let mut best_ending_here = 0_i64;

    for &val in values {
        best_ending_here += i64::from(val);
        // A negative prefix never helps what follows; drop it and start empty.
        if best_ending_here < 0 {
            best_ending_here = 0;
        }
        if best_ending_here > best_total {
            best_total = best_ending_here;
        }
    }

    best_total
}

/// Like [`max_subarray_sum`], but also reports where the best run lies.
///
/// When several runs share the maximum sum, the one that ends first wins.
///
/// # Examples
///
/// ```
/// use regular_kadane::dynamic::max_subarray;
///
/// let best = max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]);
/// assert_eq!(best.sum, 6);
/// assert_eq!(best.range, 3..7);
/// ```
pub fn max_subarray(values: &[i32]) -> Subarray {
    let mut best = Subarray { sum: 0, range: 0..0 };
    let mut ending_here = 0_i64;
    let mut start = 0;

    for (i, &val) in values.iter().enumerate() {
        ending_here += i64::from(val);
        if ending_here < 0 {
            ending_here = 0;
            start = i + 1;
        }
        if ending_here > best.sum {
            best = Subarray {
                sum: ending_here,
                range: start..i + 1,
            };
        }
    }

    debug!(
        "max subarray over {} values: sum {} at {:?}",
        values.len(),
        best.sum,
        best.range
    );
    best
}

/// The classic variant of Kadane's algorithm, where the subarray must be non-empty.
///
/// If the input slice is empty, returns `None`. When every element is negative
/// the answer is the largest single element.
///
/// # Examples
///
/// ```
/// use regular_kadane::dynamic::max_nonempty_subarray_sum;
///
/// assert_eq!(max_nonempty_subarray_sum(&[1, -2, 3, 5, -1]), Some(8));
/// assert_eq!(max_nonempty_subarray_sum(&[-8, -3, -6]), Some(-3));
/// assert_eq!(max_nonempty_subarray_sum(&[]), None);
/// ```
pub fn max_nonempty_subarray_sum(values: &[i32]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut current_sum = i64::from(first);
    let mut max_sum = current_sum;

    for &val in rest {
        // Either extend the current subarray or start a new one at `val`
        current_sum = current_sum.max(0) + i64::from(val);
        max_sum = max_sum.max(current_sum);
    }

    Some(max_sum)
}
