//! # Declaration Block Model
//!
//! A declaration block is the body of one CSS rule as raw `prop:value;...`
//! text. The upstream tokenizer escapes protected characters with `\`, so a
//! `;` or whitespace character immediately preceded by `\` is content, not
//! structure.
//!
//! ## The Lossless Guarantee
//!
//! The block is parsed exactly once into a list of *statements* (the text
//! between unescaped `;` separators) and serialized exactly once by joining
//! them back with `;`. Every statement that no combiner touches is
//! reproduced byte-for-byte — including empty statements, so `a:1;;b:2`
//! round-trips unchanged:
//!
//! ```
//! use csstight_engine::block::DeclarationBlock;
//!
//! let block = DeclarationBlock::parse("a:1;;b:2");
//! assert_eq!(block.render(), "a:1;;b:2");
//! ```
//!
//! Statement indices stand in for the byte offsets the combiners would
//! otherwise have to track: replacing statement *i* is the structured
//! equivalent of splicing over its source span.

/// The escape character agreed with the upstream tokenizer.
pub const ESCAPE: char = '\\';

/// One rule body, held as its ordered statements.
///
/// A trailing `;` in the source shows up as a final empty statement, which
/// keeps `render` a plain join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationBlock {
    pub(crate) statements: Vec<String>,
}

impl DeclarationBlock {
    /// Split raw block text on unescaped `;`.
    pub fn parse(text: &str) -> Self {
        let mut statements = Vec::new();
        let mut current = String::new();
        let mut escaped = false;

        for ch in text.chars() {
            if escaped {
                current.push(ch);
                escaped = false;
            } else if ch == ESCAPE {
                current.push(ch);
                escaped = true;
            } else if ch == ';' {
                statements.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }
        statements.push(current);

        DeclarationBlock { statements }
    }

    /// Serialize back to `prop:value;...` text.
    pub fn render(&self) -> String {
        self.statements.join(";")
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }
}

/// Split a statement into `(property, value)` at its first unescaped `:`.
///
/// Returns `None` for statements with no `:` (stray text, empty statements);
/// those never match any family and pass through untouched.
pub fn property_value(statement: &str) -> Option<(&str, &str)> {
    let idx = find_unescaped(statement, ':')?;
    Some((&statement[..idx], &statement[idx + 1..]))
}

/// Byte index of the first unescaped occurrence of `needle`.
pub fn find_unescaped(text: &str, needle: char) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch == needle {
            return Some(idx);
        }
    }
    None
}

/// True if `text` contains a whitespace character not preceded by `\`.
///
/// The `regex` crate has no look-behind, so this is a hand scan rather than
/// the source's `(?<!\\)\s` pattern.
pub fn has_unescaped_whitespace(text: &str) -> bool {
    let mut escaped = false;
    for ch in text.chars() {
        if escaped {
            escaped = false;
        } else if ch == ESCAPE {
            escaped = true;
        } else if ch.is_whitespace() {
            return true;
        }
    }
    false
}

/// Split on runs of unescaped whitespace. Escaped whitespace stays inside
/// its token (`a\ b` is one token).
pub fn split_unescaped_whitespace(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = None;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        let is_sep = !escaped && ch.is_whitespace();
        escaped = !escaped && ch == ESCAPE;

        if is_sep {
            if let Some(s) = start.take() {
                parts.push(&text[s..idx]);
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        parts.push(&text[s..]);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trip_simple() {
        let text = "color:red;margin:0;";
        assert_eq!(DeclarationBlock::parse(text).render(), text);
    }

    #[test]
    fn round_trip_empty_statements() {
        for text in ["", ";", "a:1;;b:2", "a:1;b:2"] {
            assert_eq!(DeclarationBlock::parse(text).render(), text);
        }
    }

    #[test]
    fn escaped_semicolon_stays_in_statement() {
        let block = DeclarationBlock::parse(r"content:a\;b;color:red;");
        assert_eq!(block.statements()[0], r"content:a\;b");
        assert_eq!(block.render(), r"content:a\;b;color:red;");
    }

    #[test]
    fn property_value_splits_at_first_colon() {
        assert_eq!(
            property_value("background-image:url(data:x)"),
            Some(("background-image", "url(data:x)"))
        );
        assert_eq!(property_value("no-colon-here"), None);
        assert_eq!(property_value(""), None);
    }

    #[test]
    fn unescaped_whitespace_detection() {
        assert!(has_unescaped_whitespace("1px solid"));
        assert!(!has_unescaped_whitespace("red"));
        assert!(!has_unescaped_whitespace(r"arial\ black"));
        assert!(has_unescaped_whitespace(r"arial\\ black"));
    }

    #[test]
    fn whitespace_split_keeps_escapes() {
        assert_eq!(split_unescaped_whitespace("1px 2px"), vec!["1px", "2px"]);
        assert_eq!(split_unescaped_whitespace(" 1px  2px "), vec!["1px", "2px"]);
        assert_eq!(
            split_unescaped_whitespace(r"arial\ black serif"),
            vec![r"arial\ black", "serif"]
        );
        assert_eq!(split_unescaped_whitespace(""), Vec::<&str>::new());
    }
}
