const STAR: &str = "*";
const OPEN: char = '{';
const CLOSE: char = '}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Literal,
    Wildcard,
    Param,
}

/// One token of a bind url.
///
/// `*` is a wildcard, `{name}` is a named parameter and anything else is a
/// literal. Wildcards and parameters both match any single path component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    raw: Box<str>,
    kind: SegmentKind,
}

impl Segment {
    pub fn parse(part: &str) -> Self {
        let kind = if part == STAR {
            SegmentKind::Wildcard
        } else if is_param(part) {
            SegmentKind::Param
        } else {
            SegmentKind::Literal
        };
        Self {
            raw: part.into(),
            kind,
        }
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parameter name without braces.
    pub fn name(&self) -> Option<&str> {
        match self.kind {
            SegmentKind::Param => Some(&self.raw[1..self.raw.len() - 1]),
            _ => None,
        }
    }

    #[inline]
    pub fn is_param(&self) -> bool {
        self.kind == SegmentKind::Param
    }

    /// Wildcard or named parameter.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind != SegmentKind::Literal
    }

    /// Whether this token matches a concrete component (or another token's raw text).
    #[inline]
    pub fn accepts(&self, component: &str) -> bool {
        self.is_dynamic() || &*self.raw == component
    }

    /// Symmetric compatibility of two tokens at the same position.
    #[inline]
    pub fn overlaps(&self, other: &Segment) -> bool {
        self.is_dynamic() || other.is_dynamic() || self.raw == other.raw
    }
}

impl AsRef<str> for Segment {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

fn is_param(part: &str) -> bool {
    match part
        .strip_prefix(OPEN)
        .and_then(|rest| rest.strip_suffix(CLOSE))
    {
        Some(name) => !name.is_empty() && !name.contains(CLOSE),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        let cases: &[(&str, SegmentKind)] = &[
            ("*", SegmentKind::Wildcard),
            ("{id}", SegmentKind::Param),
            ("{{id}", SegmentKind::Param),
            ("{}", SegmentKind::Literal),
            ("{a}}", SegmentKind::Literal),
            ("{id", SegmentKind::Literal),
            ("**", SegmentKind::Literal),
            ("users", SegmentKind::Literal),
        ];
        for &(part, kind) in cases {
            assert_eq!(Segment::parse(part).kind(), kind, "part = {:?}", part);
        }
    }

    #[test]
    fn param_name() {
        assert_eq!(Segment::parse("{user_id}").name(), Some("user_id"));
        assert_eq!(Segment::parse("*").name(), None);
        assert_eq!(Segment::parse("user_id").name(), None);
    }

    #[test]
    fn accepts_and_overlaps() {
        let lit = Segment::parse("users");
        let star = Segment::parse("*");
        let param = Segment::parse("{id}");

        assert!(lit.accepts("users"));
        assert!(!lit.accepts("Users"));
        assert!(star.accepts("anything"));
        assert!(param.accepts("42"));
        assert!(!lit.accepts(param.as_str()));

        assert!(lit.overlaps(&star));
        assert!(param.overlaps(&lit));
        assert!(!lit.overlaps(&Segment::parse("posts")));
    }
}
