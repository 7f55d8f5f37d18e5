//! Choosing a rank between two neighbours.

use crate::alphabet::RANK_MIN;
use crate::alphabet::canonical_bytes;
use crate::average::average_bytes;
use crate::compare::equal;
use crate::compare::greater;

/// A rank `r` with `min(prev, next) <= r <= max(prev, next)`.
///
/// When the two ranks differ the result is strictly between them and keeps
/// their shared prefix, so it is no longer than it needs to be. When they are
/// equal there is nothing to subdivide and the shorter spelling is returned
/// (the first argument on a tie). Argument order does not matter otherwise.
///
/// Inputs are not validated; callers pass ranks they have already checked.
pub fn insert(prev: &str, next: &str) -> String {
    if equal(prev, next) {
        if next.len() < prev.len() {
            return next.to_string();
        }
        return prev.to_string();
    }

    let (lo, hi) = if greater(prev, next) {
        (next.as_bytes(), prev.as_bytes())
    } else {
        (prev.as_bytes(), next.as_bytes())
    };

    let shared = lo.iter().zip(hi.iter()).take_while(|(a, b)| a == b).count();
    let mut rank: Vec<u8> = Vec::with_capacity(hi.len() + 1);

    if shared < lo.len() && shared < hi.len() {
        rank.extend_from_slice(&lo[..shared]);
        rank.extend_from_slice(&average_bytes(&lo[shared..], &hi[shared..]));
    } else {
        // lo is a prefix of hi. The reverse cannot happen once lo < hi, since
        // any extra digits of lo past hi would have to be zeros.
        let tail = hi.get(lo.len()..).unwrap_or(&[]);
        rank.extend_from_slice(lo);
        rank.extend_from_slice(&average_bytes(RANK_MIN.as_bytes(), tail));
        let len = canonical_bytes(&rank).len();
        rank.truncate(len);
    }

    return String::from_utf8_lossy(&rank).into_owned();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::RANK_MAX;

    #[test]
    fn insert_full_range() {
        assert_eq!(insert(RANK_MIN, RANK_MAX), "HI");
    }

    #[test]
    fn insert_single_digit_gap() {
        assert_eq!(insert("A", "C"), "B");
        assert_eq!(insert("7", "B"), "9");
        assert_eq!(insert("9", "B"), "A");
    }

    #[test]
    fn insert_keeps_shared_prefix() {
        assert_eq!(insert("011", "010"), "010I");
        assert_eq!(insert("02", "01Y"), "01Z");
        assert_eq!(insert("0", "02"), "01");
    }

    #[test]
    fn insert_below_an_extension() {
        assert_eq!(insert("0", "01"), "00I");
        assert_eq!(insert("B0", "B01"), "B00I");
        assert_eq!(insert("", "Z"), "HI");
    }

    #[test]
    fn insert_with_carry() {
        assert_eq!(insert("9I", "AI"), "A");
    }

    #[test]
    fn insert_equal_prefers_shorter() {
        assert_eq!(insert("B", "B"), "B");
        assert_eq!(insert("B", "B00"), "B");
        assert_eq!(insert("B000", "B"), "B");
        assert_eq!(insert("B0", "B0"), "B0");
    }

    #[test]
    fn insert_is_order_independent() {
        assert_eq!(insert("A", "C"), insert("C", "A"));
        assert_eq!(insert("01Y", "02"), insert("02", "01Y"));
    }
}
