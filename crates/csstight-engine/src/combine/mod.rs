//! # Shorthand Combination
//!
//! The per-rule combination pipeline and the stylesheet-level driver.
//!
//! ## Pipeline Order
//!
//! Within one block the family passes run in a fixed order:
//!
//! 1. `csw` — border/outline color+style+width triplets
//! 2. `aural` — cue/pause before+after pairs
//! 3. `margin_padding` — directional quads, with shorthand normalization
//! 4. `border` — four identical edges collapse to one
//! 5. `font` — priority-table assembly
//! 6. `background` — priority-table assembly
//! 7. `list_style` — priority-table assembly
//!
//! The order is load-bearing: margin/padding normalization rewrites text
//! earlier passes would have matched differently, and border unification
//! consumes the unified edges csw emits.
//!
//! ## Driver
//!
//! Blocks are independent, so the driver fans them out with rayon and
//! collects results back in index order. A block whose selector starts with
//! [`PROTECT_TOKEN`](crate::PROTECT_TOKEN) is returned byte-identical.

mod aural;
mod background;
mod border;
mod csw;
mod font;
mod group;
mod list_style;
mod margin_padding;
mod search;

use rayon::prelude::*;

use crate::PROTECT_TOKEN;
use crate::block::DeclarationBlock;
use crate::options::Options;

/// Run the enabled family passes, in pipeline order, over one block.
pub fn combine_block(text: &str, options: &Options) -> String {
    let mut block = DeclarationBlock::parse(text);

    if options.csw_combine {
        csw::combine(&mut block);
    }
    if options.auralcp_combine {
        aural::combine(&mut block);
    }
    if options.mp_combine {
        margin_padding::combine(&mut block);
    }
    if options.border_combine {
        border::combine(&mut block);
    }
    if options.font_combine {
        font::combine(&mut block);
    }
    if options.background_combine {
        background::combine(&mut block);
    }
    if options.list_combine {
        list_style::combine(&mut block);
    }

    let combined = block.render();
    if combined.len() < text.len() {
        log::debug!("combined block {} -> {} bytes", text.len(), combined.len());
    }
    combined
}

/// Combine every block of a stylesheet in place. `selectors` and `blocks`
/// are index-aligned; blocks whose selector carries the protect token are
/// skipped. Selectors are never mutated here.
pub fn combine(selectors: &[String], blocks: &mut [String], options: &Options) {
    blocks.par_iter_mut().enumerate().for_each(|(i, block)| {
        if selectors
            .get(i)
            .is_some_and(|s| s.starts_with(PROTECT_TOKEN))
        {
            return;
        }
        *block = combine_block(block, options);
    });
}
