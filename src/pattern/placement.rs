//! Placing ordered blocks of segments onto a sequence of components.
//!
//! The haystack is either the components of a concrete request or the
//! segments of another pattern, so it is generic over `AsRef<str>`.

use super::Segment;

/// Whether `block` matches the haystack exactly at `at`.
#[inline]
pub(crate) fn fits_at<C: AsRef<str>>(block: &[Segment], hay: &[C], at: usize) -> bool {
    match hay.get(at..at + block.len()) {
        Some(window) => block
            .iter()
            .zip(window)
            .all(|(segment, component)| segment.accepts(component.as_ref())),
        None => false,
    }
}

/// Slides `block` forward from `from` until it fits.
///
/// Returns the position just past the placed block. Positions are tried once,
/// in order, and never revisited.
pub(crate) fn slide<C: AsRef<str>>(block: &[Segment], hay: &[C], from: usize) -> Option<usize> {
    let mut pos = from;
    while pos + block.len() <= hay.len() {
        if fits_at(block, hay, pos) {
            return Some(pos + block.len());
        }
        pos += 1;
    }
    None
}

/// Places every block in order, each one after the previous.
pub(crate) fn place_all<C: AsRef<str>>(
    blocks: &[Vec<Segment>],
    hay: &[C],
    from: usize,
) -> Option<usize> {
    blocks
        .iter()
        .try_fold(from, |pos, block| slide(block, hay, pos))
}
