mod compile;
mod matcher;
mod placement;
mod segment;

pub use self::segment::{Segment, SegmentKind};

pub(crate) use self::placement::{fits_at, place_all, slide};

/// A bind url split into groups at optional-tail boundaries, then into segments.
///
/// The first group anchors at the start of a request path. Every later group
/// floats: it may be found anywhere after the previously placed group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    source: Box<str>,
    groups: Vec<Vec<Segment>>,
    total_len: usize,
    len_without_trailing_params: usize,
}

impl CompiledPattern {
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[inline]
    pub fn groups(&self) -> &[Vec<Segment>] {
        &self.groups
    }

    /// The first group, or an empty slice for a pattern without groups.
    #[inline]
    pub fn anchor(&self) -> &[Segment] {
        match self.groups.first() {
            Some(group) => group,
            None => &[],
        }
    }

    /// Every group after the anchor.
    #[inline]
    pub fn floating(&self) -> &[Vec<Segment>] {
        match self.groups.get(1..) {
            Some(groups) => groups,
            None => &[],
        }
    }

    #[inline]
    pub fn total_len(&self) -> usize {
        self.total_len
    }

    /// Segment count minus the trailing run of named parameters.
    #[inline]
    pub fn len_without_trailing_params(&self) -> usize {
        self.len_without_trailing_params
    }
}
