use super::{may_intersect, Pattern, Polarity};

use crate::pattern::CompiledPattern;

impl Polarity {
    #[inline]
    pub fn is_match(self) -> bool {
        self == Polarity::Match
    }
}

impl From<bool> for Polarity {
    fn from(x: bool) -> Self {
        if x {
            Self::Match
        } else {
            Self::NoMatch
        }
    }
}

impl Pattern {
    pub fn new(bind: &str, polarity: Polarity) -> Self {
        Self::from_compiled(CompiledPattern::compile(bind), polarity)
    }

    pub fn from_compiled(compiled: CompiledPattern, polarity: Polarity) -> Self {
        Self { compiled, polarity }
    }

    pub fn must_match(bind: &str) -> Self {
        Self::new(bind, Polarity::Match)
    }

    pub fn must_not_match(bind: &str) -> Self {
        Self::new(bind, Polarity::NoMatch)
    }

    #[inline]
    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }

    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    #[inline]
    pub fn source(&self) -> &str {
        self.compiled.source()
    }

    /// Raw match of the bind url, regardless of polarity.
    #[inline]
    pub fn matches(&self, request: &str) -> bool {
        self.compiled.matches(request)
    }

    /// Whether the request lands on this side of the bind url.
    pub fn is_satisfied_by(&self, request: &str) -> bool {
        self.matches(request) == self.polarity.is_match()
    }

    /// Whether some request could satisfy both patterns.
    ///
    /// `false` is a proof of disjointness, `true` is conservative.
    #[inline]
    pub fn may_intersect(&self, other: &Pattern) -> bool {
        may_intersect(self, other)
    }

    /// Checks this pattern against every pattern of a subset.
    pub fn intersects_all<'a, I>(&self, subset: I) -> bool
    where
        I: IntoIterator<Item = &'a Pattern>,
    {
        subset.into_iter().all(|other| self.may_intersect(other))
    }
}
