//! Font shorthand assembly.
//!
//! `font-size` and `line-height` fuse into a `size/height` token first
//! (`12pt/20px`), then the grouping table below is walked from most to
//! least specific; the first entry exactly matching the available
//! properties wins. The `font` grammar requires at least a size and a
//! family, so every entry ends in one of the size forms plus `font-family`.
//!
//! A `line-height` statement is only rewritten when it actually took part
//! in the winning merge through `size/height`; otherwise it is left alone
//! during the rebuild rather than destroyed.

use std::collections::HashMap;

use crate::block::DeclarationBlock;
use crate::combine::{group, search};

const PROPERTIES: [&str; 6] = [
    "font-style",
    "font-variant",
    "font-weight",
    "font-size",
    "font-family",
    "line-height",
];

const GROUPINGS: [&[&str]; 16] = [
    &["font-style", "font-variant", "font-weight", "size/height", "font-family"],
    &["font-style", "font-variant", "font-weight", "font-size", "font-family"],
    &["font-style", "font-variant", "size/height", "font-family"],
    &["font-style", "font-variant", "font-size", "font-family"],
    &["font-style", "font-weight", "size/height", "font-family"],
    &["font-style", "font-weight", "font-size", "font-family"],
    &["font-variant", "font-weight", "size/height", "font-family"],
    &["font-variant", "font-weight", "font-size", "font-family"],
    &["font-weight", "size/height", "font-family"],
    &["font-weight", "font-size", "font-family"],
    &["font-variant", "size/height", "font-family"],
    &["font-variant", "font-size", "font-family"],
    &["font-style", "size/height", "font-family"],
    &["font-style", "font-size", "font-family"],
    &["size/height", "font-family"],
    &["font-size", "font-family"],
];

fn match_property(prop: &str) -> Option<(String, String)> {
    PROPERTIES
        .contains(&prop)
        .then(|| ("font".to_string(), prop.to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    let groups = group::collect(block, match_property);
    let Some(subs) = groups.get("font") else { return };
    let mut storage = subs.clone();

    // font-size + line-height collapse into the slash form.
    let fused = if let (Some(size), Some(height)) = (
        storage.get("font-size").cloned(),
        storage.get("line-height").cloned(),
    ) {
        storage.remove("font-size");
        storage.remove("line-height");
        storage.insert("size/height".to_string(), format!("{size}/{height}"));
        true
    } else {
        false
    };

    let Some(shorthand) = search::search_definitions("font", &storage, &GROUPINGS) else {
        return;
    };

    let matcher = move |prop: &str| {
        if prop == "line-height" && !fused {
            return None; // line-height did not take part: leave it alone
        }
        match_property(prop)
    };
    let replacements = HashMap::from([("font".to_string(), shorthand)]);
    group::splice(block, matcher, replacements);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> String {
        let mut block = DeclarationBlock::parse(input);
        combine(&mut block);
        block.render()
    }

    #[test]
    fn size_height_family_combines() {
        assert_eq!(
            run("font-size:12pt;line-height:20px;font-family:arial;"),
            "font:12pt/20px arial;"
        );
    }

    #[test]
    fn size_family_combines() {
        assert_eq!(run("font-size:12pt;font-family:arial;"), "font:12pt arial;");
    }

    #[test]
    fn full_grouping_combines_in_grammar_order() {
        assert_eq!(
            run("font-family:arial;font-weight:bold;font-variant:small-caps;\
                 font-style:italic;font-size:12pt;line-height:20px;"),
            "font:italic small-caps bold 12pt/20px arial;"
        );
    }

    #[test]
    fn important_size_blocks_merge() {
        let input = "font-size:12pt !important;line-height:20px;font-family:arial;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn family_alone_is_untouched() {
        let input = "font-family:arial;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn stray_line_height_prevents_merge_and_survives() {
        // No font-size to fuse with, and no grouping contains line-height.
        let input = "line-height:20px;font-family:arial;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn size_without_family_is_untouched() {
        let input = "font-size:12pt;font-weight:bold;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn duplicate_size_uses_last_value() {
        assert_eq!(
            run("font-size:10pt;font-family:arial;font-size:12pt;"),
            "font:12pt arial;"
        );
    }
}
