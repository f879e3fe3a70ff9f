use super::{CompiledPattern, Segment};

use once_cell::sync::Lazy;
use regex::Regex;

const SLASH: char = '/';
const QUESTION: char = '?';

// "/?/", "?/" and "/?" all end an optional group.
static BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\?/|\?/|/\?").expect("boundary regex is valid"));

/// Splits a path on `/`, dropping empty components.
#[inline]
pub(crate) fn split_components(path: &str) -> impl Iterator<Item = &str> {
    path.split(SLASH).filter(|part| !part.is_empty())
}

/// Drops the query part of a request url.
#[inline]
pub(crate) fn strip_query(request: &str) -> &str {
    request.split_once(QUESTION).map_or(request, |(path, _)| path)
}

impl CompiledPattern {
    pub fn compile(bind: &str) -> Self {
        let groups: Vec<Vec<Segment>> = BOUNDARY
            .split(bind)
            .map(|group| split_components(group).map(Segment::parse).collect())
            .collect();

        let total_len: usize = groups.iter().map(Vec::len).sum();

        let trailing_params = groups
            .iter()
            .rev()
            .flat_map(|group| group.iter().rev())
            .take_while(|s| s.is_param())
            .count();

        let len_without_trailing_params = total_len - trailing_params;

        tracing::trace!(
            pattern = bind,
            groups = groups.len(),
            total_len,
            len_without_trailing_params,
            "compiled bind url"
        );

        Self {
            source: bind.into(),
            groups,
            total_len,
            len_without_trailing_params,
        }
    }
}
