//! List-style shorthand assembly over `{type, position, image}`.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::DeclarationBlock;
use crate::combine::{group, search};

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^list-style-(type|position|image)$").expect("invalid list-style pattern")
    })
}

const GROUPINGS: [&[&str]; 7] = [
    &["type", "position", "image"],
    &["type", "position"],
    &["type", "image"],
    &["position", "image"],
    &["type"],
    &["position"],
    &["image"],
];

fn match_property(prop: &str) -> Option<(String, String)> {
    let caps = pattern().captures(prop)?;
    Some(("list-style".to_string(), caps[1].to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    let groups = group::collect(block, match_property);
    let Some(storage) = groups.get("list-style") else { return };

    let Some(shorthand) = search::search_definitions("list-style", storage, &GROUPINGS) else {
        return;
    };

    let replacements = HashMap::from([("list-style".to_string(), shorthand)]);
    group::splice(block, match_property, replacements);
}
