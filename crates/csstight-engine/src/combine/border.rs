//! Border edge unification.
//!
//! When all four of `border-top/right/bottom/left` hold *identical* values
//! (typically the unified edges the csw pass just produced), they collapse
//! into a single `border:<value>`. Unlike margin/padding there is no 2- or
//! 3-value border grammar, so anything short of strict equality stays as is.
//!
//! Unified edge values are multi-word by construction (`1px solid red`), so
//! only the marker half of the guard applies here.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::block::DeclarationBlock;
use crate::combine::group;
use crate::guard;

static PATTERN: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    PATTERN.get_or_init(|| {
        Regex::new(r"^(border)-(top|right|bottom|left)$").expect("invalid border pattern")
    })
}

fn match_property(prop: &str) -> Option<(String, String)> {
    let caps = pattern().captures(prop)?;
    Some((caps[1].to_string(), caps[2].to_string()))
}

pub(crate) fn combine(block: &mut DeclarationBlock) {
    let groups = group::collect(block, match_property);
    let Some(subs) = groups.get("border") else { return };
    if subs.len() != 4 {
        return;
    }

    let value = &subs["top"];
    if subs["right"] != *value || subs["bottom"] != *value || subs["left"] != *value {
        return;
    }
    if guard::has_marker(value) {
        return;
    }

    let replacements = HashMap::from([("border".to_string(), format!("border:{value}"))]);
    group::splice(block, match_property, replacements);
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
    fn identical_edges_unify() {
        assert_eq!(
            run("border-top:1px solid red;border-right:1px solid red;\
                 border-bottom:1px solid red;border-left:1px solid red;"),
            "border:1px solid red;"
        );
    }

    #[test]
    fn differing_edge_blocks_unification() {
        let input = "border-top:1px solid red;border-right:1px solid red;\
                     border-bottom:1px solid red;border-left:2px solid red;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn three_edges_are_untouched() {
        let input = "border-top:1px solid red;border-right:1px solid red;border-bottom:1px solid red;";
        assert_eq!(run(input), input);
    }

    #[test]
    fn important_edges_stay_apart() {
        let input = "border-top:1px solid red !important;border-right:1px solid red !important;\
                     border-bottom:1px solid red !important;border-left:1px solid red !important;";
        assert_eq!(run(input), input);
    }
}
