//! Flat tokenization of markup text.
//!
//! This stage is deliberately permissive: it classifies input into tag,
//! attribute, comment, raw code and text tokens without ever failing.
//! Structure (and the only errors this crate reports) come later, from the
//! marker grammar and the expansion engine.

mod lexer;
mod token;

pub use self::lexer::tokenize;
pub use self::token::Token;
