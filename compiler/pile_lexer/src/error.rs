//! Lexical and structural errors raised while reading source text.

use crate::Span;

/// Malformed token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("invalid escape sequence `\\{escape}` in string literal")]
    InvalidEscape { escape: char, span: Span },
    #[error("malformed number literal `{text}`")]
    MalformedNumber { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedString { span }
            | Self::InvalidEscape { span, .. }
            | Self::MalformedNumber { span, .. } => *span,
        }
    }
}

/// Structural error: bad block or header shape, or a character that is not
/// part of the language.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("unbalanced braces: block opened here is never closed")]
    UnbalancedBraces { span: Span },
    #[error("expected `{{` to open a block, found {}", describe(.found))]
    ExpectedBlock { found: Option<char>, span: Span },
    #[error("`func` needs a name before its body")]
    MissingFunctionName { span: Span },
    #[error("`{name}` is not a valid name")]
    InvalidName { name: String, span: Span },
    #[error("keyword `{name}` cannot be used as a name")]
    KeywordAsName { name: String, span: Span },
    #[error("parameter `{name}` is declared twice")]
    DuplicateParameter { name: String, span: Span },
    #[error("invalid character: `{found}`")]
    InvalidCharacter { found: char, span: Span },
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnbalancedBraces { span }
            | Self::ExpectedBlock { span, .. }
            | Self::MissingFunctionName { span }
            | Self::InvalidName { span, .. }
            | Self::KeywordAsName { span, .. }
            | Self::DuplicateParameter { span, .. }
            | Self::InvalidCharacter { span, .. } => *span,
        }
    }
}

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("`{c}`"),
        None => "end of input".to_string(),
    }
}
