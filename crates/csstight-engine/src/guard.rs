//! # Uncombinability Guard
//!
//! Some value modifiers change cascade or browser-targeting semantics for a
//! single sub-property: `!important`, `inherit`, and the `!ie` hack marker.
//! Folding such a value into a shorthand would either lose the marker or
//! apply it to sub-properties it was never meant to affect, so any group
//! containing one is left alone. Unescaped whitespace marks a multi-token
//! value (e.g. `1px solid`, a quoted font list that was not escaped
//! upstream), which the single-slot shorthand grammars cannot absorb either.

use std::sync::OnceLock;

use regex::Regex;

use crate::block;

static MARKERS: OnceLock<Regex> = OnceLock::new();

fn markers() -> &'static Regex {
    MARKERS.get_or_init(|| Regex::new(r"(?i)inherit|!important|!ie").expect("invalid marker regex"))
}

/// True if the value carries a cascade or hack marker, case-insensitively.
pub fn has_marker(value: &str) -> bool {
    markers().is_match(value)
}

/// True if the value cannot safely take part in a merge: it carries a
/// marker or contains unescaped whitespace.
pub fn is_uncombinable(value: &str) -> bool {
    has_marker(value) || block::has_unescaped_whitespace(value)
}

/// A collection is uncombinable if any member is.
pub fn any_uncombinable<'a, I>(values: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    values.into_iter().any(is_uncombinable)
}
