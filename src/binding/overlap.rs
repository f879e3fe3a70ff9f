use super::{Pattern, Polarity};

use crate::pattern::slide;

/// Symbolic intersection test between two polarity-tagged patterns.
///
/// Two must-not-match patterns are never compared and always report `true`.
pub fn may_intersect(a: &Pattern, b: &Pattern) -> bool {
    let ret = match (a.polarity(), b.polarity()) {
        (Polarity::Match, Polarity::Match) => compare_with_match(a, b),
        (Polarity::Match, Polarity::NoMatch) => compare_match_and_no_match(a, b),
        (Polarity::NoMatch, Polarity::Match) => compare_match_and_no_match(b, a),
        (Polarity::NoMatch, Polarity::NoMatch) => true,
    };
    tracing::trace!(a = a.source(), b = b.source(), intersect = ret, "compared bindings");
    ret
}

/// Compares two must-match patterns by their anchor groups only.
///
/// Groups after the anchor are not looked at, so patterns that differ only in
/// later groups or past the shorter anchor are reported as intersecting.
///
/// # Panics
/// Panics if either pattern is not [`Polarity::Match`].
pub fn compare_with_match(a: &Pattern, b: &Pattern) -> bool {
    assert!(
        a.polarity().is_match() && b.polarity().is_match(),
        "improper usage of compare_with_match"
    );

    let lhs = a.compiled().anchor();
    let rhs = b.compiled().anchor();
    lhs.iter().zip(rhs).all(|(l, r)| l.overlaps(r))
}

/// Compares a must-match pattern with a must-not-match pattern.
///
/// Returns `false` only when the excluded pattern provably fires on every
/// request the matching pattern accepts: its anchor is a prefix of the
/// matching anchor and its later groups can all be placed, in order, inside
/// the matching pattern's groups. A block never straddles two groups of the
/// matching pattern.
///
/// # Panics
/// Panics if `matching` is not [`Polarity::Match`] or `excluded` is not
/// [`Polarity::NoMatch`].
pub fn compare_match_and_no_match(matching: &Pattern, excluded: &Pattern) -> bool {
    assert!(
        matching.polarity().is_match() && !excluded.polarity().is_match(),
        "improper usage of compare_match_and_no_match"
    );

    let m = matching.compiled();
    let n = excluded.compiled();

    let m_anchor = m.anchor();
    let n_anchor = n.anchor();

    if n_anchor.len() > m_anchor.len() {
        return true;
    }

    let prefix_fits = n_anchor
        .iter()
        .zip(m_anchor)
        .all(|(x, y)| x.accepts(y.as_str()));
    if !prefix_fits {
        return true;
    }

    let mut groups = m.groups().iter();
    let mut current = groups.next();
    let mut pos = n_anchor.len();

    for block in n.floating() {
        loop {
            let group = match current {
                Some(g) => g,
                None => return true,
            };
            match slide(block, &group[..], pos) {
                Some(end) => {
                    pos = end;
                    break;
                }
                None => {
                    current = groups.next();
                    pos = 0;
                }
            }
        }
    }

    current.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "improper usage of compare_with_match")]
    fn match_compare_rejects_no_match() {
        let a = Pattern::must_match("GET/a");
        let b = Pattern::must_not_match("GET/a");
        compare_with_match(&a, &b);
    }

    #[test]
    #[should_panic(expected = "improper usage of compare_match_and_no_match")]
    fn mixed_compare_rejects_swapped_arguments() {
        let a = Pattern::must_match("GET/a");
        let b = Pattern::must_not_match("GET/a");
        compare_match_and_no_match(&b, &a);
    }

    #[test]
    #[should_panic(expected = "improper usage of compare_match_and_no_match")]
    fn mixed_compare_rejects_two_matches() {
        let a = Pattern::must_match("GET/a");
        let b = Pattern::must_match("GET/b");
        compare_match_and_no_match(&a, &b);
    }

    #[test]
    fn excluded_group_placed_across_match_groups() {
        let m = Pattern::must_match("GET/a/?/x/b/?/c");
        // [b] does not fit in [GET, a] past offset 2, so it slides into [x, b].
        let n = Pattern::must_not_match("GET/a/?/b");
        assert!(!compare_match_and_no_match(&m, &n));

        // [b, c] straddles two match groups and is never placed.
        let n = Pattern::must_not_match("GET/a/?/b/c");
        assert!(compare_match_and_no_match(&m, &n));

        let n = Pattern::must_not_match("GET/a/?/b/?/c");
        assert!(!compare_match_and_no_match(&m, &n));

        let n = Pattern::must_not_match("GET/a/?/c/?/b");
        assert!(compare_match_and_no_match(&m, &n));
    }

    #[test]
    fn excluded_literal_does_not_accept_match_wildcard() {
        let m = Pattern::must_match("GET/*/edit");
        let n = Pattern::must_not_match("GET/users");
        assert!(compare_match_and_no_match(&m, &n));

        let n = Pattern::must_not_match("GET/{x}");
        assert!(!compare_match_and_no_match(&m, &n));
    }

    #[test]
    fn longer_excluded_anchor_cannot_be_disproved() {
        let m = Pattern::must_match("GET/users");
        let n = Pattern::must_not_match("GET/users/{id}");
        assert!(compare_match_and_no_match(&m, &n));
    }
}
