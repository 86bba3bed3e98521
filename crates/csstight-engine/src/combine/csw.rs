//! Color/style/width combination for border, per-edge border, and outline.
//!
//! `border-width:1px;border-style:solid;border-color:red` becomes
//! `border:1px solid red`. The same applies to `outline` and to each
//! `border-top/right/bottom/left` edge; unified edges feed the border
//! edge-unification pass that runs later in the pipeline.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::DeclarationBlock;
use crate::combine::group;
use crate::guard;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^(border|border-top|border-bottom|border-left|border-right|outline)-(color|style|width)$")
            .expect("invalid csw pattern")
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
        // All three slots must be present and clean.
        if subs.len() == 3 && !guard::any_uncombinable(subs.values().map(String::as_str)) {
            let shorthand = format!("{tag}:{} {} {}", subs["width"], subs["style"], subs["color"]);
            replacements.insert(tag, shorthand);
        }
    }

    if !replacements.is_empty() {
        group::splice(block, match_property, replacements);
    }
}
