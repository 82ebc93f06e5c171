//! On-demand tokenizer.
//!
//! [`next_token`] reads exactly one token from a cursor. Whitespace and
//! `#` comments are skipped before the token; nothing after it is consumed,
//! so callers can switch to raw character scanning (block bodies, function
//! headers) immediately after a keyword.

use std::borrow::Cow;

use crate::{Keyword, LexError, SourceCursor, Token, TokenKind};

/// Read the next token from `cursor`.
///
/// Returns `TokenKind::Eof` once the cursor is exhausted, and keeps returning
/// it on further calls.
pub fn next_token<'a>(cursor: &mut SourceCursor<'a>) -> Result<Token<'a>, LexError> {
    loop {
        cursor.skip_whitespace();
        let start = cursor.pos();
        let Some(c) = cursor.next_char() else {
            return Ok(Token::new(TokenKind::Eof, cursor.span_from(start)));
        };

        let kind = match c {
            '#' => {
                cursor.skip_line();
                continue;
            }
            c if c.is_ascii_alphabetic() => lex_word(cursor, start),
            c if c.is_ascii_digit() => lex_number(cursor, start)?,
            '"' => lex_string(cursor, start)?,
            c => TokenKind::Op(c),
        };
        return Ok(Token::new(kind, cursor.span_from(start)));
    }
}

/// `[A-Za-z][A-Za-z0-9]*`, then keyword lookup.
fn lex_word<'a>(cursor: &mut SourceCursor<'a>, start: usize) -> TokenKind<'a> {
    cursor.eat_while(|c| c.is_ascii_alphanumeric());
    let word = cursor.slice(start, cursor.pos());
    match Keyword::from_word(word) {
        Some(kw) => TokenKind::Keyword(kw),
        None => TokenKind::Ident(word),
    }
}

/// `[0-9]+` as a base-10 `i64`.
///
/// A digit run glued to letters (`12ab`) or too large for `i64` is malformed.
fn lex_number<'a>(cursor: &mut SourceCursor<'a>, start: usize) -> Result<TokenKind<'a>, LexError> {
    cursor.eat_while(|c| c.is_ascii_digit());
    if cursor.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
        cursor.eat_while(|c| c.is_ascii_alphanumeric());
        return Err(LexError::MalformedNumber {
            text: cursor.slice(start, cursor.pos()).to_string(),
            span: cursor.span_from(start),
        });
    }
    let text = cursor.slice(start, cursor.pos());
    text.parse::<i64>()
        .map(TokenKind::Int)
        .map_err(|_| LexError::MalformedNumber {
            text: text.to_string(),
            span: cursor.span_from(start),
        })
}

/// String literal after its opening quote.
///
/// Borrows the source when the literal has no escapes.
fn lex_string<'a>(cursor: &mut SourceCursor<'a>, start: usize) -> Result<TokenKind<'a>, LexError> {
    let content_start = cursor.pos();
    let mut owned: Option<String> = None;

    loop {
        let here = cursor.pos();
        match cursor.next_char() {
            None => {
                return Err(LexError::UnterminatedString {
                    span: cursor.span_from(start),
                })
            }
            Some('"') => {
                let text = match owned {
                    Some(s) => Cow::Owned(s),
                    None => Cow::Borrowed(cursor.slice(content_start, here)),
                };
                return Ok(TokenKind::Str(text));
            }
            Some('\\') => {
                let escaped = match cursor.next_char() {
                    Some('"') => '"',
                    Some('\\') => '\\',
                    Some('n') => '\n',
                    Some('t') => '\t',
                    Some(other) => {
                        return Err(LexError::InvalidEscape {
                            escape: other,
                            span: cursor.span_from(here),
                        })
                    }
                    None => {
                        return Err(LexError::UnterminatedString {
                            span: cursor.span_from(start),
                        })
                    }
                };
                owned
                    .get_or_insert_with(|| cursor.slice(content_start, here).to_string())
                    .push(escaped);
            }
            Some(c) => {
                if let Some(s) = owned.as_mut() {
                    s.push(c);
                }
            }
        }
    }
}
