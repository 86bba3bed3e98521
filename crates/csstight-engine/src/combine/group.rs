//! Shared scan/group/rebuild mechanics for the family combiners.
//!
//! Every family works the same way over a [`DeclarationBlock`]:
//!
//! 1. **Collect** (`collect`): walk the statements in order, mapping each
//!    matching property to its `(tag, sub-property)` pair and recording
//!    `tag -> {sub: value}`. A later statement for the same `(tag, sub)`
//!    overwrites the earlier one — cascade-last-wins.
//! 2. **Decide**: the family checks each tag's group against its own
//!    completeness policy and synthesizes a shorthand statement, or drops
//!    the tag.
//! 3. **Rebuild** (`splice`): walk the statements again. The first
//!    statement matching a tag with a pending replacement becomes the
//!    shorthand; every later matching statement for that tag is deleted, so
//!    duplicate longhands collapse into exactly one shorthand at the
//!    position of the tag's first occurrence. Statements matching no
//!    replaced tag are left byte-for-byte.

use std::collections::HashMap;

use crate::block::{self, DeclarationBlock};

/// `tag -> {sub-property: latest value}` for one family over one block.
pub(crate) type Groups = HashMap<String, HashMap<String, String>>;

pub(crate) fn collect<F>(block: &DeclarationBlock, matcher: F) -> Groups
where
    F: Fn(&str) -> Option<(String, String)>,
{
    let mut storage: Groups = HashMap::new();
    for statement in block.statements() {
        if let Some((prop, value)) = block::property_value(statement)
            && let Some((tag, sub)) = matcher(prop)
        {
            storage.entry(tag).or_default().insert(sub, value.to_string());
        }
    }
    storage
}

pub(crate) fn splice<F>(
    block: &mut DeclarationBlock,
    matcher: F,
    replacements: HashMap<String, String>,
) where
    F: Fn(&str) -> Option<(String, String)>,
{
    // Some(_) = shorthand still pending, None = already spent for this tag.
    let mut pending: HashMap<String, Option<String>> = replacements
        .into_iter()
        .map(|(tag, text)| (tag, Some(text)))
        .collect();

    let mut rebuilt = Vec::with_capacity(block.statements.len());
    for statement in block.statements.drain(..) {
        let tag = block::property_value(&statement)
            .and_then(|(prop, _)| matcher(prop))
            .map(|(tag, _)| tag);

        match tag.and_then(|t| pending.get_mut(&t).map(Option::take)) {
            Some(Some(shorthand)) => rebuilt.push(shorthand),
            Some(None) => {} // later duplicate of a merged tag: delete
            None => rebuilt.push(statement),
        }
    }
    block.statements = rebuilt;
}
