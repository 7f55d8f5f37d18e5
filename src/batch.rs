//! Generating many evenly spread ranks at once.
//!
//! The index range `[0, n)` is bisected: the middle index gets the midpoint
//! of the current bounds, then each half is filled against the narrower
//! bounds on its side. Ranks near the middle of the batch stay short and
//! recursion depth is O(log n).

use crate::alphabet::RANK_MAX;
use crate::alphabet::RANK_MIN;
use crate::insert::insert;

/// `n` strictly increasing ranks strictly between `start` and `end`.
///
/// Deterministic: the same arguments always yield the same ranks. Requires
/// `start < end`; bounds are not validated.
pub fn ranks_between(start: &str, end: &str, n: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(n);
    bisect(0, n, start, end, &mut out);
    return out;
}

/// `n` ranks spanning the whole alphabet, between `RANK_MIN` and `RANK_MAX`.
pub fn ranks(n: usize) -> Vec<String> {
    return ranks_between(RANK_MIN, RANK_MAX, n);
}

fn bisect(left: usize, right: usize, prev: &str, next: &str, out: &mut Vec<String>) {
    if left == right {
        return;
    }
    let index = left + (right - left) / 2;
    let rank = insert(prev, next);
    bisect(left, index, prev, &rank, out);
    let rest = rank.clone();
    out.push(rank);
    bisect(index + 1, right, &rest, next, out);
}
