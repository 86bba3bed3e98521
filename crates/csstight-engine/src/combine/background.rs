//! Background shorthand assembly.
//!
//! One grouping table, most inclusive first: the color+image combinations,
//! then image-led combinations without color, then bare color. Exact-set
//! matching means a group like `{color, repeat}` (no image) merges nothing —
//! no table entry equals it.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::DeclarationBlock;
use crate::combine::{group, search};

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^background-(color|image|repeat|attachment|position)$")
            .expect("invalid background pattern")
    })
}

const GROUPINGS: [&[&str]; 16] = [
    // With color
    &["color", "image", "repeat", "attachment", "position"],
    &["color", "image", "attachment", "position"],
    &["color", "image", "repeat", "position"],
    &["color", "image", "repeat", "attachment"],
    &["color", "image", "repeat"],
    &["color", "image", "attachment"],
    &["color", "image", "position"],
    &["color", "image"],
    // Without color
    &["image", "attachment", "position"],
    &["image", "repeat", "position"],
    &["image", "repeat", "attachment"],
    &["image", "repeat"],
    &["image", "attachment"],
    &["image", "position"],
    &["image"],
    // Just color
    &["color"],
];

fn match_property(prop: &str) -> Option<(String, String)> {
    let caps = pattern().captures(prop)?;
    Some(("background".to_string(), caps[1].to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    let groups = group::collect(block, match_property);
    let Some(storage) = groups.get("background") else { return };

    let Some(shorthand) = search::search_definitions("background", storage, &GROUPINGS) else {
        return;
    };

    let replacements = HashMap::from([("background".to_string(), shorthand)]);
    group::splice(block, match_property, replacements);
}
