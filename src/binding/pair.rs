use super::{Pattern, PatternPair, Polarity};

use crate::pattern::CompiledPattern;

impl PatternPair {
    pub fn new(bind: &str) -> Self {
        Self::from_compiled(CompiledPattern::compile(bind))
    }

    pub fn from_compiled(compiled: CompiledPattern) -> Self {
        Self {
            positive: Pattern::from_compiled(compiled.clone(), Polarity::Match),
            negative: Pattern::from_compiled(compiled, Polarity::NoMatch),
            processed: false,
        }
    }

    #[inline]
    pub fn positive(&self) -> &Pattern {
        &self.positive
    }

    #[inline]
    pub fn negative(&self) -> &Pattern {
        &self.negative
    }

    #[inline]
    pub fn source(&self) -> &str {
        self.positive.source()
    }

    /// Picks the half of the url field the request falls into.
    pub fn resolve(&self, request: &str) -> &Pattern {
        if self.positive.matches(request) {
            &self.positive
        } else {
            &self.negative
        }
    }

    #[inline]
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn mark_processed(&mut self) {
        self.processed = true;
    }
}
