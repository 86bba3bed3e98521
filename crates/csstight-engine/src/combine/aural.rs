//! Aural cue/pause combination.
//!
//! `cue-before:url(a.au);cue-after:url(b.au)` becomes
//! `cue:url(a.au) url(b.au)`; likewise `pause-before`/`pause-after`.
//! Deprecated in the standards, still cheap to support.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::DeclarationBlock;
use crate::combine::group;
use crate::guard;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^(cue|pause)-(before|after)$").expect("invalid aural pattern")
    })
}

fn match_property(prop: &str) -> Option<(String, String)> {
    let caps = pattern().captures(prop)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    let groups = group::collect(block, match_property);

    let mut replacements = HashMap::new();
    for (tag, subs) in groups {
        if subs.len() == 2 && !guard::any_uncombinable(subs.values().map(String::as_str)) {
            let shorthand = format!("{tag}:{} {}", subs["before"], subs["after"]);
            replacements.insert(tag, shorthand);
        }
    }

    if !replacements.is_empty() {
        group::splice(block, match_property, replacements);
    }
}
