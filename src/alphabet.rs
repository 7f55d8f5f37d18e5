//! The digit alphabet and canonical form of a rank.
//!
//! A rank is a base-36 fraction written most significant digit first,
//! using `0-9` then `A-Z`. Because the alphabet is in ASCII order, the
//! byte order of two canonical ranks is also their numeric order.
//!
//! Trailing `0` digits carry no value: `"B"`, `"B0"` and `"B000"` are the
//! same rank. Stripping them gives the canonical form, and the canonical
//! form of an all-zero string is the empty string (the absolute minimum).

use crate::error::RankError;
use crate::error::Result;

/// Every digit, in ascending order.
pub const DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of digits in the alphabet.
pub const BASE: u8 = 36;

/// The smallest single-digit rank.
pub const RANK_MIN: &str = "0";

/// The largest single-digit rank.
pub const RANK_MAX: &str = "Z";

/// The minimum digit as a byte.
pub const MIN_DIGIT: u8 = b'0';

/// The maximum digit as a byte.
pub const MAX_DIGIT: u8 = b'Z';

/// Value of a digit symbol, or `None` if it is not in the alphabet.
#[inline]
pub fn digit_value(symbol: u8) -> Option<u8> {
    return match symbol {
        b'0'..=b'9' => Some(symbol - b'0'),
        b'A'..=b'Z' => Some(symbol - b'A' + 10),
        _ => None,
    };
}

/// Symbol for a digit value. Values at or above `BASE` are a logic error.
#[inline]
pub fn symbol(value: u8) -> u8 {
    debug_assert!(value < BASE, "digit value {} out of range", value);
    return DIGITS.as_bytes()[(value % BASE) as usize];
}

/// True iff every character of `s` is in the alphabet.
pub fn is_valid(s: &str) -> bool {
    return s.bytes().all(|b| digit_value(b).is_some());
}

/// Reject `s` if it contains a character outside the alphabet.
pub fn validate(s: &str) -> Result<()> {
    if !is_valid(s) {
        return Err(RankError::InvalidRank);
    }
    return Ok(());
}

/// Strip trailing minimum digits. May return the empty string.
#[inline]
pub fn canonical(s: &str) -> &str {
    return s.trim_end_matches(RANK_MIN);
}

/// Strip trailing minimum digits from a byte slice.
#[inline]
pub(crate) fn canonical_bytes(s: &[u8]) -> &[u8] {
    let mut end = s.len();
    while end > 0 && s[end - 1] == MIN_DIGIT {
        end -= 1;
    }
    return &s[..end];
}
