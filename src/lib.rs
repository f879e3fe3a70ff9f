//! Bind url matching and registration-time overlap analysis.
//!
//! A bind url is a verb followed by `/`-separated segments, e.g.
//! `GET/users/*/{id}`. Segments are literals, `*` wildcards or `{name}`
//! parameters. `/?/`, `?/` or `/?` end an optional group: the first group is
//! anchored at the start of the request path, every later group may appear
//! anywhere after the previous one.
//!
//! ```
//! use bind_pattern::{Pattern, PatternPair, Polarity};
//!
//! let pair = PatternPair::new("GET/a/?/b");
//! assert_eq!(pair.resolve("GET/a/x/b").polarity(), Polarity::Match);
//! assert_eq!(pair.resolve("GET/a/x/y").polarity(), Polarity::NoMatch);
//!
//! let show = Pattern::must_match("GET/users/{id}");
//! let new = Pattern::must_not_match("GET/users/new");
//! assert!(show.may_intersect(&new));
//! ```

#![deny(unsafe_code)]

mod binding;
mod pattern;

pub use self::binding::{
    compare_match_and_no_match, compare_with_match, may_intersect, Pattern, PatternPair,
    Polarity,
};
pub use self::pattern::{CompiledPattern, Segment, SegmentKind};

#[cfg(feature = "http-bind")]
pub mod http_bind;

#[cfg(feature = "http-bind")]
pub use self::http_bind::{normalize_bind, request_url, BindError, Method};
