//! Token types produced by the tokenizer.

use std::borrow::Cow;
use std::fmt;

use crate::Span;

/// Reserved words. Everything else alphabetic is an identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Print,
    Func,
    Var,
    Loop,
    Break,
    If,
    Dup,
    Swap,
    Over,
    TwoDup,
}

const KEYWORDS: &[(&str, Keyword)] = &[
    ("print", Keyword::Print),
    ("func", Keyword::Func),
    ("var", Keyword::Var),
    ("loop", Keyword::Loop),
    ("break", Keyword::Break),
    ("if", Keyword::If),
    ("dup", Keyword::Dup),
    ("swap", Keyword::Swap),
    ("over", Keyword::Over),
    ("twodup", Keyword::TwoDup),
];

impl Keyword {
    /// Look up a word in the keyword table.
    pub fn from_word(word: &str) -> Option<Keyword> {
        KEYWORDS
            .iter()
            .find_map(|&(text, kw)| if text == word { Some(kw) } else { None })
    }

    pub fn as_str(self) -> &'static str {
        KEYWORDS
            .iter()
            .find_map(|&(text, kw)| if kw == self { Some(text) } else { None })
            .unwrap_or("")
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One lexical unit.
///
/// Identifiers borrow from the source; string literals borrow unless they
/// contain escapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Keyword(Keyword),
    Ident(&'a str),
    Int(i64),
    Str(Cow<'a, str>),
    /// Any other single character, e.g. `+` or `.`.
    Op(char),
    Eof,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(kw) => write!(f, "keyword `{kw}`"),
            Self::Ident(name) => write!(f, "identifier `{name}`"),
            Self::Int(n) => write!(f, "number `{n}`"),
            Self::Str(s) => write!(f, "string {s:?}"),
            Self::Op(c) => write!(f, "`{c}`"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its absolute position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind<'a>, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}
