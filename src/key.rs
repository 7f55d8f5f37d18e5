//! An owned, validated rank.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::alphabet;
use crate::compare;
use crate::error::RankError;
use crate::error::Result;
use crate::insert::insert;

/// A rank string known to use only alphabet digits.
///
/// Equality, ordering and hashing follow the canonical form, so `B` and
/// `B00` are the same key. The original spelling is kept and is what
/// `as_str` and `Display` return.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rank(String);

impl Rank {
    /// Parse a rank, rejecting characters outside the alphabet.
    pub fn parse(s: &str) -> Result<Rank> {
        alphabet::validate(s)?;
        return Ok(Rank(s.to_string()));
    }

    /// The rank as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        return &self.0;
    }

    /// The rank with trailing zeros removed.
    #[inline]
    pub fn canonical(&self) -> &str {
        return alphabet::canonical(&self.0);
    }

    pub fn into_string(self) -> String {
        return self.0;
    }

    /// A rank between `self` and `other`.
    pub fn between(&self, other: &Rank) -> Rank {
        return Rank(insert(&self.0, &other.0));
    }
}

impl TryFrom<String> for Rank {
    type Error = RankError;

    fn try_from(s: String) -> Result<Rank> {
        alphabet::validate(&s)?;
        return Ok(Rank(s));
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> String {
        return rank.0;
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Rank> {
        return Rank::parse(s);
    }
}

impl AsRef<str> for Rank {
    fn as_ref(&self) -> &str {
        return &self.0;
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        return compare::equal(&self.0, &other.0);
    }
}

impl Eq for Rank {}

impl Hash for Rank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        return compare::compare(&self.0, &other.0);
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.0);
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Rank({})", self.0);
    }
}
