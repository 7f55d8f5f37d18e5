//! Single-step successor and predecessor at a fixed precision.
//!
//! The precision `limit` is a digit count. A rank shorter than the limit has
//! spare precision, so its neighbour is found by extending it: the successor
//! appends `0...01` and the predecessor lowers the last digit and appends
//! `Z...Z`, both up to `limit` digits. A rank already at or past the limit is
//! stepped in place as a base-36 integer.
//!
//! Complexity: O(max(len(curr), limit)).

use tracing::debug;

use crate::alphabet::BASE;
use crate::alphabet::MAX_DIGIT;
use crate::alphabet::MIN_DIGIT;
use crate::alphabet::RANK_MAX;
use crate::alphabet::RANK_MIN;
use crate::alphabet::canonical;
use crate::alphabet::digit_value;
use crate::alphabet::is_valid;
use crate::alphabet::symbol;
use crate::average::Digits;
use crate::compare::greater;
use crate::compare::less;
use crate::error::RankError;
use crate::error::Result;

/// The smallest rank greater than `curr` at precision `limit`.
pub fn next(curr: &str, limit: usize) -> Result<String> {
    let canon = check(curr)?;

    let mut out = Digits::from_slice(canon.as_bytes());
    if canon.len() < limit {
        out.resize(limit - 1, MIN_DIGIT);
        out.push(symbol(1));
        return Ok(finish(out));
    }

    for d in out.iter_mut().rev() {
        let value = digit_value(*d).unwrap_or(0) + 1;
        if value < BASE {
            *d = symbol(value);
            return Ok(finish(out));
        }
        *d = MIN_DIGIT;
    }
    // Every digit was Z: the next value would be 1.0, which no rank spells.
    debug!(rank = canon, limit, "successor out of range");
    return Err(RankError::Overflow);
}

/// The largest rank smaller than `curr` at precision `limit`.
pub fn prev(curr: &str, limit: usize) -> Result<String> {
    let canon = check(curr)?;

    // Trimmed, so the last digit is nonzero and lowering it never borrows.
    let Some((&last, head)) = canon.as_bytes().split_last() else {
        debug!(limit, "no predecessor of the minimum rank");
        return Err(RankError::Underflow);
    };
    let mut out = Digits::from_slice(head);
    out.push(symbol(digit_value(last).unwrap_or(1) - 1));
    if canon.len() < limit {
        out.resize(limit, MAX_DIGIT);
    }
    return Ok(finish(out));
}

/// Validate a stepper input and return its canonical form.
fn check(curr: &str) -> Result<&str> {
    if !is_valid(curr) {
        debug!(rank = curr, "rejected rank outside the alphabet");
        return Err(RankError::InvalidRank);
    }
    if greater(curr, RANK_MAX) {
        debug!(rank = curr, "rejected rank above the maximum");
        return Err(RankError::Overflow);
    }
    if less(curr, RANK_MIN) || curr.is_empty() {
        debug!(rank = curr, "rejected rank below the minimum");
        return Err(RankError::Underflow);
    }
    return Ok(canonical(curr));
}

fn finish(mut digits: Digits) -> String {
    while digits.last() == Some(&MIN_DIGIT) {
        digits.pop();
    }
    return digits.iter().map(|&b| b as char).collect();
}
