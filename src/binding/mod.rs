mod imp;
mod overlap;
mod pair;

pub use self::overlap::{compare_match_and_no_match, compare_with_match, may_intersect};

use crate::pattern::CompiledPattern;

/// Whether a request must match a pattern, or must not match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Match,
    NoMatch,
}

/// A compiled bind url tagged with a polarity.
///
/// A pair of these, one of each polarity, splits the url field into the
/// requests a bind url matches and the requests it does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    compiled: CompiledPattern,
    polarity: Polarity,
}

/// Both polarities of one bind url.
#[derive(Debug, Clone)]
pub struct PatternPair {
    positive: Pattern,
    negative: Pattern,
    processed: bool,
}
