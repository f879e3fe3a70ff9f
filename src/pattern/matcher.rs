use super::compile::{split_components, strip_query};
use super::{fits_at, place_all, CompiledPattern};

use smallvec::SmallVec;

impl CompiledPattern {
    /// Matches a concrete request url (`path[?query]`) against this pattern.
    ///
    /// The anchor group must match at the start of the path. Later groups are
    /// slid forward one position at a time and never revisited once placed.
    /// Components left over after the last group are ignored.
    pub fn matches(&self, request: &str) -> bool {
        let matched = self.match_components(request);
        tracing::debug!(pattern = %self.source, request, matched, "matching url");
        matched
    }

    fn match_components(&self, request: &str) -> bool {
        let parts: SmallVec<[&str; 8]> = split_components(strip_query(request)).collect();

        if parts.len() < self.len_without_trailing_params {
            return false;
        }

        let anchor = self.anchor();
        if !fits_at(anchor, &parts[..], 0) {
            return false;
        }

        place_all(self.floating(), &parts[..], anchor.len()).is_some()
    }
}
