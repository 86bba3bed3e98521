//! Directional margin/padding combination.
//!
//! Two phases per tag, atomic as a pair:
//!
//! 1. **Normalize**: a pre-existing `margin:`/`padding:` shorthand is
//!    expanded in place into the four directional longhands using the CSS
//!    1/2/3/4-value rules, so mixed shorthand+longhand authoring is
//!    reconciled before re-minimization.
//! 2. **Combine**: with all four edges present and clean, emit the most
//!    compact form the values allow — 1, 2 (`top right`), 3
//!    (`top right bottom`) or 4 values, tried in that order.
//!
//! The expansion happens on a scratch copy and is kept only when the merge
//! succeeds: expanding without recombining would lengthen the block, which
//! the engine never does. Shorthands carrying a marker (`!important`,
//! `inherit`, `!ie`) or with a value count outside 1..=4 are never expanded.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::{self, DeclarationBlock};
use crate::combine::group;
use crate::guard;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^(margin|padding)-(top|right|bottom|left)$").expect("invalid mp pattern")
    })
}

fn match_property(prop: &str) -> Option<(String, String)> {
    let caps = pattern().captures(prop)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    combine_tag(block, "margin");
    combine_tag(block, "padding");
}

fn combine_tag(block: &mut DeclarationBlock, tag: &str) {
    let mut work = block.clone();
    expand_shorthands(&mut work, tag);

    let groups = group::collect(&work, match_property);
    let Some(subs) = groups.get(tag) else { return };
    if subs.len() != 4 || guard::any_uncombinable(subs.values().map(String::as_str)) {
        return;
    }

    let replacements = HashMap::from([(tag.to_string(), compact(tag, subs))]);
    group::splice(&mut work, match_property, replacements);
    *block = work;
}

/// Replace each `tag:<values>` statement with its four directional
/// longhands, in place. Statements that cannot be expanded stay as they are.
fn expand_shorthands(block: &mut DeclarationBlock, tag: &str) {
    let mut rebuilt = Vec::with_capacity(block.statements.len());
    for statement in block.statements.drain(..) {
        let expanded = block::property_value(&statement)
            .filter(|(prop, _)| *prop == tag)
            .and_then(|(_, value)| expand_value(tag, value));
        match expanded {
            Some(longhands) => rebuilt.extend(longhands),
            None => rebuilt.push(statement),
        }
    }
    block.statements = rebuilt;
}

fn expand_value(tag: &str, value: &str) -> Option<Vec<String>> {
    if guard::has_marker(value) {
        return None;
    }

    let parts = block::split_unescaped_whitespace(value.trim());
    let [top, right, bottom, left] = match parts.as_slice() {
        [all] => [all; 4],
        [vertical, horizontal] => [vertical, horizontal, vertical, horizontal],
        [top, horizontal, bottom] => [top, horizontal, bottom, horizontal],
        [top, right, bottom, left] => [top, right, bottom, left],
        _ => return None,
    };

    Some(vec![
        format!("{tag}-top:{top}"),
        format!("{tag}-right:{right}"),
        format!("{tag}-bottom:{bottom}"),
        format!("{tag}-left:{left}"),
    ])
}

/// Canonical CSS compaction, most compact form first.
fn compact(tag: &str, subs: &HashMap<String, String>) -> String {
    let (top, right, bottom, left) = (&subs["top"], &subs["right"], &subs["bottom"], &subs["left"]);

    if top == bottom && left == right && top == left {
        format!("{tag}:{top}")
    } else if top == bottom && left == right {
        format!("{tag}:{top} {right}")
    } else if right == left {
        format!("{tag}:{top} {right} {bottom}")
    } else {
        format!("{tag}:{top} {right} {bottom} {left}")
    }
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
    fn four_equal_edges_collapse_to_one_value() {
        assert_eq!(
            run("margin-top:5px;margin-right:5px;margin-bottom:5px;margin-left:5px;"),
            "margin:5px;"
        );
    }

    #[test]
    fn opposite_pairs_collapse_to_two_values() {
        assert_eq!(
            run("margin-top:1px;margin-right:2px;margin-bottom:1px;margin-left:2px;"),
            "margin:1px 2px;"
        );
    }

    #[test]
    fn matching_sides_collapse_to_three_values() {
        assert_eq!(
            run("padding-top:1px;padding-right:2px;padding-bottom:3px;padding-left:2px;"),
            "padding:1px 2px 3px;"
        );
    }

    #[test]
    fn distinct_edges_keep_four_values() {
        assert_eq!(
            run("margin-top:1px;margin-right:2px;margin-bottom:3px;margin-left:4px;"),
            "margin:1px 2px 3px 4px;"
        );
    }

    #[test]
    fn shorthand_normalizes_then_recompacts() {
        // Already-minimal 4-value shorthand is a fixed point.
        assert_eq!(run("margin:1px 2px 3px 4px;"), "margin:1px 2px 3px 4px;");
        assert_eq!(run("padding:1px 1px 1px 1px;"), "padding:1px;");
        assert_eq!(run("margin:1px 2px 1px;"), "margin:1px 2px;");
    }

    #[test]
    fn shorthand_reconciles_with_later_longhand() {
        assert_eq!(
            run("margin:1px;margin-top:9px;"),
            "margin:9px 1px 1px;"
        );
    }

    #[test]
    fn longhand_overridden_by_later_shorthand() {
        assert_eq!(run("margin-top:9px;margin:1px;"), "margin:1px;");
    }

    #[test]
    fn missing_edge_is_untouched() {
        let input = "margin-top:1px;margin-right:2px;margin-bottom:3px;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn important_edge_blocks_merge() {
        let input =
            "margin-top:1px;margin-right:2px;margin-bottom:1px;margin-left:2px !important;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn important_shorthand_is_never_expanded() {
        let input = "margin:1px !important;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn five_value_shorthand_is_untouched() {
        let input = "margin:1px 2px 3px 4px 5px;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn margin_and_padding_are_independent() {
        let input = "margin-top:1px;padding-top:1px;padding-right:1px;padding-bottom:1px;padding-left:1px;";
        assert_eq!(run(input), "margin-top:1px;padding:1px;");
    }
}
