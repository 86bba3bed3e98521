//! Priority-ordered exact-set search shared by the font, background, and
//! list-style combiners.
//!
//! Each of those families carries a static table of required sub-property
//! subsets, most specific first. A candidate wins only when the available
//! sub-properties are *exactly* the required set — same cardinality, every
//! member present. Plain subset containment would wrongly merge groups with
//! leftover longhands (e.g. `{color, repeat}` against `[color]`), which is
//! not semantically safe: the survivors could re-shadow the shorthand.

use std::collections::HashMap;

use crate::guard;

/// First table entry whose required set exactly equals the available
/// sub-properties, rendered as `prop:v1 v2 ...` in required order. `None`
/// when nothing matches or any value is uncombinable.
pub(crate) fn search_definitions(
    prop: &str,
    storage: &HashMap<String, String>,
    candidates: &[&[&str]],
) -> Option<String> {
    candidates
        .iter()
        .find_map(|required| exact_set(prop, storage, required))
}

fn exact_set(prop: &str, storage: &HashMap<String, String>, required: &[&str]) -> Option<String> {
    if storage.len() != required.len() {
        return None;
    }

    let mut shorthand = format!("{prop}:");
    for (i, sub) in required.iter().enumerate() {
        let value = storage.get(*sub)?;
        if guard::is_uncombinable(value) {
            return None;
        }
        if i > 0 {
            shorthand.push(' ');
        }
        shorthand.push_str(value);
    }
    Some(shorthand)
}
