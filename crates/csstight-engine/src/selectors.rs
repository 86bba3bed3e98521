//! Selector-level normalization.
//!
//! Two small, toggleable rewrites over selector text only:
//!
//! - lowercase bare element names (`BODY DIV.Header` → `body div.Header`) so
//!   identical selectors can later be recognized as such; class and id
//!   names keep their case,
//! - space out `:first-letter`/`:first-line` (old IE chokes on
//!   `a:first-line{` without the space).
//!
//! Protected selectors pass through untouched, like everywhere else.

use std::sync::OnceLock;

use regex::Regex;

use crate::PROTECT_TOKEN;
use crate::options::Options;

static WORDS: OnceLock<Regex> = OnceLock::new();
static PSEUDO_COMMA: OnceLock<Regex> = OnceLock::new();
static DOUBLE_SPACE: OnceLock<Regex> = OnceLock::new();
static PSEUDO_END: OnceLock<Regex> = OnceLock::new();

fn words() -> &'static Regex {
    WORDS.get_or_init(|| Regex::new(r"([^a-zA-Z])?([a-zA-Z]+)").expect("invalid word pattern"))
}

fn pseudo_comma() -> &'static Regex {
    PSEUDO_COMMA.get_or_init(|| {
        Regex::new(r"(?i):first-(letter|line),").expect("invalid pseudo pattern")
    })
}

fn double_space() -> &'static Regex {
    DOUBLE_SPACE.get_or_init(|| Regex::new(r"  ").expect("invalid space pattern"))
}

fn pseudo_end() -> &'static Regex {
    PSEUDO_END.get_or_init(|| {
        Regex::new(r"(?i):first-(letter|line)$").expect("invalid pseudo pattern")
    })
}

/// Apply the enabled selector rewrites in place.
pub fn normalize(selectors: &mut [String], options: &Options) {
    for selector in selectors.iter_mut() {
        if selector.starts_with(PROTECT_TOKEN) {
            continue;
        }
        if options.lowercase_selectors {
            *selector = lowercase_selectors(selector);
        }
        if options.pseudo_space {
            *selector = pseudo_space(selector);
        }
    }
}

/// Lowercase alphabetic runs unless they name a class or id.
fn lowercase_selectors(selector: &str) -> String {
    words()
        .replace_all(selector, |caps: &regex::Captures| {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let word = &caps[2];
            if prefix == "." || prefix == "#" {
                format!("{prefix}{word}")
            } else {
                format!("{prefix}{}", word.to_ascii_lowercase())
            }
        })
        .into_owned()
}

fn pseudo_space(selector: &str) -> String {
    let spaced = pseudo_comma().replace_all(selector, ":first-${1} ,");
    let spaced = double_space().replace_all(&spaced, " ");
    pseudo_end()
        .replace_all(&spaced, ":first-${1} ")
        .into_owned()
}
