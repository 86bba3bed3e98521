//! # csstight-engine
//!
//! A CSS shorthand-combination engine: given the declaration block of a
//! rule as raw `prop:value;` text, it detects groups of longhand properties
//! that are equivalent to a single shorthand and rewrites them into it,
//! shrinking output without changing rendered behavior.
//!
//! The combiners never guess: a group missing a required sub-property, or
//! carrying `!important`/`inherit`/browser-hack markers, is left
//! byte-for-byte as written. Absence of a merge is the universal fallback,
//! never an error.
//!
//! ```
//! use csstight_engine::{Options, combine_block};
//!
//! let combined = combine_block(
//!     "border-width:1px;border-style:solid;border-color:red;",
//!     &Options::default(),
//! );
//! assert_eq!(combined, "border:1px solid red;");
//! ```

pub mod block;
pub mod combine;
pub mod guard;
pub mod options;
pub mod selectors;
pub mod tokenize;

pub use combine::{combine, combine_block};
pub use options::Options;
pub use tokenize::{Rule, Stylesheet, TokenizeError};

/// Injection token agreed with the tokenizer: any selector with this strict
/// prefix marks its block as protected content the engine must pass through
/// untouched. Control characters cannot appear in real selectors.
pub const PROTECT_TOKEN: &str = "\u{1}raw\u{1}";
