//! Exact midpoint of two ranks.
//!
//! Both ranks are read as base-36 fractions and averaged digit by digit,
//! most significant first. An odd digit sum leaves half a unit behind, which
//! is carried into the next position as a full `BASE`. When that carry pushes
//! an emitted digit to `BASE` or above, one is added back into the digits
//! already emitted, rolling `Z` over to `0` as needed.
//!
//! Complexity: O(max(len(lo), len(hi))) time, one buffer allocation at most.

use smallvec::SmallVec;

use crate::alphabet::BASE;
use crate::alphabet::MIN_DIGIT;
use crate::alphabet::digit_value;
use crate::alphabet::symbol;

/// A buffer of digit values or symbols. Most ranks fit inline.
pub(crate) type Digits = SmallVec<[u8; 16]>;

/// Midpoint of two ranks, in canonical form.
///
/// The result is strictly between `lo` and `hi` unless they are equal.
/// Characters outside the alphabet are read as the minimum digit.
pub fn average(lo: &str, hi: &str) -> String {
    let digits = average_bytes(lo.as_bytes(), hi.as_bytes());
    return digits.iter().map(|&b| b as char).collect();
}

/// Midpoint of two symbol strings, returned as canonical symbols.
pub(crate) fn average_bytes(lo: &[u8], hi: &[u8]) -> Digits {
    let base = BASE as u16;
    let len = lo.len().max(hi.len());
    let value_at = |s: &[u8], i: usize| -> u16 {
        return s.get(i).and_then(|&b| digit_value(b)).unwrap_or(0) as u16;
    };

    let mut avg = Digits::with_capacity(len + 1);
    let mut remain: u16 = 0;
    let mut i = 0;
    while i < len || remain != 0 {
        let sum = value_at(lo, i) + value_at(hi, i) + remain;
        let mut curr = sum / 2;
        if curr >= base {
            // sum < 3 * BASE, so the overshoot is exactly one unit.
            carry_back(&mut avg);
            curr -= base;
        }
        avg.push(curr as u8);
        remain = (sum % 2) * base;
        i += 1;
    }

    for d in avg.iter_mut() {
        *d = symbol(*d);
    }
    while avg.last() == Some(&MIN_DIGIT) {
        avg.pop();
    }
    return avg;
}

/// Add one unit at the least significant emitted digit, rolling over leftward.
fn carry_back(avg: &mut Digits) {
    for d in avg.iter_mut().rev() {
        if *d + 1 < BASE {
            *d += 1;
            return;
        }
        *d = 0;
    }
    // The mean of two values below one is below one.
    debug_assert!(false, "carry escaped the most significant digit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range_midpoint() {
        assert_eq!(average("0", "Z"), "HI");
    }

    #[test]
    fn even_sum_needs_one_digit() {
        assert_eq!(average("A", "C"), "B");
        assert_eq!(average("0", "8"), "4");
    }

    #[test]
    fn odd_sum_carries_half_unit() {
        assert_eq!(average("0", "1"), "0I");
        assert_eq!(average("1Y", "2"), "1Z");
    }

    #[test]
    fn overshoot_rolls_into_previous_digit() {
        // 9I + AI = 9+10 with an odd remainder, then 18+18+36 = 72 -> 36.
        assert_eq!(average("9I", "AI"), "A");
    }

    #[test]
    fn overshoot_rolls_over_max_digits() {
        // 0 + 1 gives 0 rem 36, then Z + 0 + 36 = 71 -> Z rem 36,
        // then Z + Z + 36 = 106 -> 53, which carries through the Z.
        assert_eq!(average("0ZZ", "10Z"), "10H");
    }

    #[test]
    fn equal_inputs_average_to_themselves() {
        assert_eq!(average("B", "B"), "B");
        assert_eq!(average("B00", "B"), "B");
        assert_eq!(average("", ""), "");
    }
}
