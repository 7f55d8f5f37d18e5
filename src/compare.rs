//! Total order over ranks.
//!
//! Two ranks are equal when their canonical forms are identical. Otherwise
//! the first differing digit decides, and if one rank is a prefix of the
//! other the shorter one is smaller (the longer one must have a nonzero
//! digit past the shared prefix, or they would be equal).
//!
//! On canonical forms this order is exactly byte order, which is what lets
//! a storage layer sort ranks as plain strings.
//!
//! These functions do not validate. Characters outside the alphabet are
//! compared by raw byte value.

use std::cmp::Ordering;

use crate::alphabet::canonical;

/// True iff `a` and `b` denote the same rank.
#[inline]
pub fn equal(a: &str, b: &str) -> bool {
    return canonical(a) == canonical(b);
}

/// True iff `a` is strictly smaller than `b`.
pub fn less(a: &str, b: &str) -> bool {
    if equal(a, b) {
        return false;
    }
    for (x, y) in a.bytes().zip(b.bytes()) {
        if x < y {
            return true;
        }
        if y < x {
            return false;
        }
    }
    return a.len() < b.len();
}

/// True iff `a` is strictly greater than `b`.
#[inline]
pub fn greater(a: &str, b: &str) -> bool {
    return !equal(a, b) && !less(a, b);
}

/// Three-way comparison consistent with [`equal`] and [`less`].
pub fn compare(a: &str, b: &str) -> Ordering {
    if equal(a, b) {
        return Ordering::Equal;
    }
    if less(a, b) {
        return Ordering::Less;
    }
    return Ordering::Greater;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_zeros_are_equal() {
        assert!(equal("B", "B00"));
        assert!(equal("B000", "B"));
        assert!(equal("", "0"));
        assert!(!equal("B", "B01"));
    }

    #[test]
    fn first_difference_decides() {
        assert!(less("A", "B"));
        assert!(less("9Z", "A"));
        assert!(less("A0Z", "A1"));
        assert!(greater("B", "AZZZ"));
        assert!(!less("B", "A"));
    }

    #[test]
    fn prefix_is_smaller() {
        assert!(less("A", "A01"));
        assert!(less("", "0001"));
        assert!(greater("A01", "A0"));
        assert!(!less("A0", "A"));
        assert!(!greater("A0", "A"));
    }

    #[test]
    fn compare_is_three_way() {
        assert_eq!(compare("HI", "HI0"), Ordering::Equal);
        assert_eq!(compare("8R", "D4I"), Ordering::Less);
        assert_eq!(compare("UMI", "Q9"), Ordering::Greater);
    }
}
