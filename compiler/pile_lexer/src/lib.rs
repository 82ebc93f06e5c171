//! Pile Lexer - character cursor, tokenizer, and block scanner.
//!
//! Pile programs are never tokenized up front. The evaluator pulls one token
//! at a time from a [`SourceCursor`], and block-structured keywords (`func`,
//! `loop`, `if`) bypass the tokenizer to carve a balanced `{ ... }` body out of
//! the raw characters. Each body becomes its own cursor, so nested execution
//! never shares position state with its parent.
//!
//! # Layers
//!
//! - [`SourceCursor`]: forward-only character reader over a text slice,
//!   aware of its absolute offset in the whole program.
//! - [`next_token`]: turns the next run of characters into a [`Token`].
//! - [`read_block`] / [`read_func_header`]: raw scanning for block bodies.
//!
//! Positions are absolute byte offsets ([`Span`]) into the program passed to
//! the evaluator, even for tokens read from a nested body.

mod cursor;
mod error;
mod scan;
mod span;
mod token;
mod tokenizer;

pub use cursor::SourceCursor;
pub use error::{LexError, SyntaxError};
pub use scan::{is_identifier, read_block, read_func_header, Block, FuncHeader, ParamList};
pub use span::Span;
pub use token::{Keyword, Token, TokenKind};
pub use tokenizer::next_token;
