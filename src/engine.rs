//! The rank engine and the interface it implements.
//!
//! The engine holds only its precision limit, fixed at construction. Every
//! operation is a pure function of its arguments and that limit, so an
//! engine can be copied freely and shared across threads without locking.

use tracing::debug;
use tracing::trace;

use crate::batch;
use crate::compare;
use crate::config::RankConfig;
use crate::error::RankError;
use crate::error::Result;
use crate::insert;
use crate::step;

/// Operations for producing and ordering rank keys.
///
/// `insert`, `ranks_between` and the comparisons expect well formed,
/// well ordered ranks and do not check them. `next` and `prev` validate.
pub trait Ranker {
    /// `n` ranks spread over the whole range, in ascending order.
    fn ranks(&self, n: usize) -> Vec<String>;

    /// `n` ranks strictly between `start` and `end`, in ascending order.
    fn ranks_between(&self, start: &str, end: &str, n: usize) -> Vec<String>;

    /// The rank one step below `curr` at the configured precision.
    fn prev(&self, curr: &str) -> Result<String>;

    /// The rank one step above `curr` at the configured precision.
    fn next(&self, curr: &str) -> Result<String>;

    /// A rank between `prev` and `next`.
    fn insert(&self, prev: &str, next: &str) -> String;

    /// True iff `a` and `b` denote the same rank.
    fn equal(&self, a: &str, b: &str) -> bool;

    /// True iff `a` sorts strictly before `b`.
    fn less(&self, a: &str, b: &str) -> bool;

    /// True iff `a` sorts strictly after `b`.
    fn greater(&self, a: &str, b: &str) -> bool;
}

/// Rank arithmetic at a fixed precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankEngine {
    limit: usize,
}

impl RankEngine {
    /// Create an engine that steps at `limit` digits of precision.
    pub fn new(limit: usize) -> Result<RankEngine> {
        if limit == 0 {
            debug!("refusing to build a rank engine with limit 0");
            return Err(RankError::BadLimit);
        }
        debug!(limit, "rank engine ready");
        return Ok(RankEngine { limit });
    }

    /// Create an engine from a loaded configuration.
    pub fn from_config(config: &RankConfig) -> Result<RankEngine> {
        return RankEngine::new(config.limit);
    }

    /// The precision, in digits, used by `next` and `prev`.
    #[inline]
    pub fn limit(&self) -> usize {
        return self.limit;
    }
}

impl Ranker for RankEngine {
    fn ranks(&self, n: usize) -> Vec<String> {
        let ranks = batch::ranks(n);
        trace!(n, first = ranks.first().map(String::as_str), "generated ranks");
        return ranks;
    }

    fn ranks_between(&self, start: &str, end: &str, n: usize) -> Vec<String> {
        let ranks = batch::ranks_between(start, end, n);
        trace!(start, end, n, "generated ranks between bounds");
        return ranks;
    }

    fn prev(&self, curr: &str) -> Result<String> {
        let rank = step::prev(curr, self.limit)?;
        trace!(curr, prev = rank.as_str(), "stepped down");
        return Ok(rank);
    }

    fn next(&self, curr: &str) -> Result<String> {
        let rank = step::next(curr, self.limit)?;
        trace!(curr, next = rank.as_str(), "stepped up");
        return Ok(rank);
    }

    fn insert(&self, prev: &str, next: &str) -> String {
        let rank = insert::insert(prev, next);
        trace!(prev, next, rank = rank.as_str(), "inserted");
        return rank;
    }

    fn equal(&self, a: &str, b: &str) -> bool {
        return compare::equal(a, b);
    }

    fn less(&self, a: &str, b: &str) -> bool {
        return compare::less(a, b);
    }

    fn greater(&self, a: &str, b: &str) -> bool {
        return compare::greater(a, b);
    }
}
