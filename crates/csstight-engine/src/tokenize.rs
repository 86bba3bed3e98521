//! # Tokenizing Boundary
//!
//! Splits raw CSS source into `(selector, declaration block)` pairs for the
//! combination engine and renders them back out. This is deliberately *not*
//! a CSS parser: values are never interpreted, grammar is never validated,
//! and anything this stage does not understand is preserved verbatim rather
//! than rejected.
//!
//! - Comments are stripped (string-aware).
//! - Rules are split on balanced braces, skipping over quoted strings.
//! - At-rules — both statement form (`@import ...;`) and block form
//!   (`@media ... { ... }`, nested braces and all) — are carried through as
//!   protected entries: their raw text goes behind
//!   [`PROTECT_TOKEN`](crate::PROTECT_TOKEN) and the engine never touches
//!   them.
//! - Whitespace inside selectors and declarations is collapsed; quoted
//!   strings keep theirs.
//!
//! The only hard error is a `{` that never closes; everything else is
//! skip-not-fail.

use thiserror::Error;

use crate::PROTECT_TOKEN;
use crate::options::Options;
use crate::{combine, selectors};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("unclosed declaration block starting at byte {offset}")]
    UnclosedBlock { offset: usize },
}

/// One stylesheet entry: either a style rule (`selector` + `block`) or a
/// protected raw chunk (token-prefixed `selector`, empty `block`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub block: String,
}

impl Rule {
    fn protected(raw: &str) -> Self {
        Rule {
            selector: format!("{PROTECT_TOKEN}{raw}"),
            block: String::new(),
        }
    }

    pub fn is_protected(&self) -> bool {
        self.selector.starts_with(PROTECT_TOKEN)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn parse(css: &str) -> Result<Self, TokenizeError> {
        let text = strip_comments(css);
        let mut rules = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];
            let trimmed = rest.trim_start();
            pos += rest.len() - trimmed.len();
            if trimmed.is_empty() {
                break;
            }

            if trimmed.starts_with('@') {
                pos += scan_at_rule(trimmed, pos, &mut rules)?;
                continue;
            }

            let Some((open, _)) = find_unquoted(trimmed, &['{']) else {
                // Trailing text with no block: preserve, don't guess.
                rules.push(Rule::protected(trimmed));
                break;
            };
            let close = find_block_end(trimmed, open)
                .ok_or(TokenizeError::UnclosedBlock { offset: pos + open })?;

            let selector = collapse_whitespace(&trimmed[..open]);
            if !selector.is_empty() {
                let block = normalize_block(&trimmed[open + 1..close]);
                rules.push(Rule { selector, block });
            }
            pos += close + 1;
        }

        Ok(Stylesheet { rules })
    }

    /// Selector normalization plus the combination driver, via the
    /// index-aligned pair interface the engine exposes.
    pub fn compress(&mut self, options: &Options) {
        let mut sels: Vec<String> = self.rules.iter().map(|r| r.selector.clone()).collect();
        let mut blocks: Vec<String> = self.rules.iter().map(|r| r.block.clone()).collect();

        selectors::normalize(&mut sels, options);
        combine::combine(&sels, &mut blocks, options);

        for (rule, (selector, block)) in self.rules.iter_mut().zip(sels.into_iter().zip(blocks)) {
            rule.selector = selector;
            rule.block = block;
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            match rule.selector.strip_prefix(PROTECT_TOKEN) {
                Some(raw) => out.push_str(raw),
                None => {
                    out.push_str(&rule.selector);
                    out.push('{');
                    out.push_str(&rule.block);
                    out.push('}');
                }
            }
        }
        out
    }
}

/// Consume one at-rule from the front of `text`, pushing it as a protected
/// rule. Returns the number of bytes consumed.
fn scan_at_rule(text: &str, base: usize, rules: &mut Vec<Rule>) -> Result<usize, TokenizeError> {
    match find_unquoted(text, &[';', '{']) {
        Some((idx, ';')) => {
            rules.push(Rule::protected(&text[..=idx]));
            Ok(idx + 1)
        }
        Some((idx, _)) => {
            let close = find_block_end(text, idx)
                .ok_or(TokenizeError::UnclosedBlock { offset: base + idx })?;
            rules.push(Rule::protected(&text[..=close]));
            Ok(close + 1)
        }
        None => {
            rules.push(Rule::protected(text));
            Ok(text.len())
        }
    }
}

/// Strip `/* ... */` comments, leaving quoted strings intact.
fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    while let Some(ch) = chars.next() {
        if let Some(quote) = in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                in_string = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => {
                in_string = Some(ch);
                out.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev_star = false;
                for c in chars.by_ref() {
                    if prev_star && c == '/' {
                        break;
                    }
                    prev_star = c == '*';
                }
            }
            _ => out.push(ch),
        }
    }
    out
}

/// First occurrence of any needle outside quoted strings and escapes.
fn find_unquoted(text: &str, needles: &[char]) -> Option<(usize, char)> {
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if let Some(quote) = in_string {
            if ch == quote {
                in_string = None;
            }
        } else if ch == '"' || ch == '\'' {
            in_string = Some(ch);
        } else if needles.contains(&ch) {
            return Some((idx, ch));
        }
    }
    None
}

/// Byte index of the `}` matching the `{` at `open`, honoring nesting.
fn find_block_end(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (idx, ch) in text[open..].char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if let Some(quote) = in_string {
            if ch == quote {
                in_string = None;
            }
        } else if ch == '"' || ch == '\'' {
            in_string = Some(ch);
        } else if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth -= 1;
            if depth == 0 {
                return Some(open + idx);
            }
        }
    }
    None
}

/// Collapse whitespace runs to single spaces and trim, leaving quoted
/// strings and escaped characters alone.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    let mut pending_space = false;

    for ch in text.chars() {
        let literal = escaped || in_string.is_some();
        if !literal && ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            if !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);

        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if let Some(quote) = in_string {
            if ch == quote {
                in_string = None;
            }
        } else if ch == '"' || ch == '\'' {
            in_string = Some(ch);
        }
    }
    out
}

/// Normalize a rule body into the engine's `prop:value;...` form.
fn normalize_block(body: &str) -> String {
    let mut declarations = Vec::new();
    for segment in split_unquoted(body, ';') {
        let declaration = normalize_declaration(segment);
        if !declaration.is_empty() {
            declarations.push(declaration);
        }
    }
    if declarations.is_empty() {
        return String::new();
    }
    let mut out = declarations.join(";");
    out.push(';');
    out
}

fn normalize_declaration(segment: &str) -> String {
    match find_unquoted(segment, &[':']) {
        Some((idx, _)) => {
            let prop = collapse_whitespace(&segment[..idx]);
            // Custom properties are case-sensitive; everything else folds.
            let prop = if prop.starts_with("--") {
                prop
            } else {
                prop.to_ascii_lowercase()
            };
            let value = collapse_whitespace(&segment[idx + 1..]);
            format!("{prop}:{value}")
        }
        None => collapse_whitespace(segment),
    }
}

/// Split on `sep` outside quoted strings and escapes.
fn split_unquoted(text: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = text;
    while let Some((idx, _)) = find_unquoted(rest, &[sep]) {
        parts.push(&rest[..idx]);
        rest = &rest[idx + sep.len_utf8()..];
    }
    parts.push(rest);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_and_normalizes_a_rule() {
        let sheet = Stylesheet::parse("div .a {\n  color : red ;\n  margin: 0 auto;\n}").unwrap();
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].selector, "div .a");
        assert_eq!(sheet.rules[0].block, "color:red;margin:0 auto;");
    }

    #[test]
    fn render_round_trips_minified_form() {
        let sheet = Stylesheet::parse("a{color:red;}b{margin:0;}").unwrap();
        assert_eq!(sheet.render(), "a{color:red;}b{margin:0;}");
    }

    #[test]
    fn comments_are_stripped() {
        let sheet = Stylesheet::parse("/* note */a{/* inner */color:red;}").unwrap();
        assert_eq!(sheet.render(), "a{color:red;}");
    }

    #[test]
    fn comment_lookalike_in_string_survives() {
        let sheet = Stylesheet::parse("a{content:\"/* keep */\";}").unwrap();
        assert_eq!(sheet.rules[0].block, "content:\"/* keep */\";");
    }

    #[test]
    fn at_rules_are_protected_verbatim() {
        let css = "@import url(x.css);@media print{a{color:red}}b{color:blue}";
        let sheet = Stylesheet::parse(css).unwrap();
        assert_eq!(sheet.rules.len(), 3);
        assert!(sheet.rules[0].is_protected());
        assert!(sheet.rules[1].is_protected());
        assert!(!sheet.rules[2].is_protected());
        assert_eq!(
            sheet.render(),
            "@import url(x.css);@media print{a{color:red}}b{color:blue;}"
        );
    }

    #[test]
    fn protected_blocks_survive_compression() {
        let css = "@media print{p{margin-top:1px;margin-right:1px;margin-bottom:1px;margin-left:1px}}";
        let mut sheet = Stylesheet::parse(css).unwrap();
        sheet.compress(&Options::default());
        assert_eq!(sheet.render(), css);
    }

    #[test]
    fn compress_combines_and_normalizes() {
        let mut sheet = Stylesheet::parse(
            "DIV.Box { border-width: 1px; border-style: solid; border-color: red; }",
        )
        .unwrap();
        sheet.compress(&Options::default());
        assert_eq!(sheet.render(), "div.Box{border:1px solid red;}");
    }

    #[test]
    fn unclosed_block_is_an_error() {
        assert_eq!(
            Stylesheet::parse("a{color:red"),
            Err(TokenizeError::UnclosedBlock { offset: 1 })
        );
    }

    #[test]
    fn brace_inside_string_does_not_close_block() {
        let sheet = Stylesheet::parse("a{content:\"}\";color:red}").unwrap();
        assert_eq!(sheet.rules[0].block, "content:\"}\";color:red;");
    }

    #[test]
    fn empty_input_parses_to_empty_sheet() {
        assert_eq!(Stylesheet::parse("  \n ").unwrap().rules.len(), 0);
    }
}
