//! Raw scanning for block-structured keywords.
//!
//! `func`, `loop`, and `if` do not go through the tokenizer for their bodies.
//! They read characters straight from the cursor, tracking `{`/`}` depth until
//! the block that opened at depth 1 closes. The captured body excludes both the
//! opening and the closing brace.
//!
//! Braces inside string literals and `#` comments do not count toward depth.

use smallvec::SmallVec;

use crate::{Keyword, SourceCursor, Span, SyntaxError};

/// Parameter names in declaration order; most functions take a handful.
pub type ParamList<'a> = SmallVec<[&'a str; 4]>;

/// A pre-scanned block body, ready to be wrapped in a fresh cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block<'a> {
    /// Text between the braces.
    pub body: &'a str,
    /// Absolute span of `body`.
    pub span: Span,
}

impl<'a> Block<'a> {
    /// A new cursor over the body, positioned at its start.
    pub fn cursor(&self) -> SourceCursor<'a> {
        SourceCursor::with_base(self.body, self.span.start)
    }
}

/// `<name> <param>* {` as read by `func`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncHeader<'a> {
    pub name: &'a str,
    pub name_span: Span,
    /// Parameter names in declaration order.
    pub params: ParamList<'a>,
}

/// `[A-Za-z][A-Za-z0-9]*`
pub fn is_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// Read `{ ... }` after optional whitespace.
pub fn read_block<'a>(cursor: &mut SourceCursor<'a>) -> Result<Block<'a>, SyntaxError> {
    cursor.skip_whitespace();
    let open = cursor.pos();
    match cursor.next_char() {
        Some('{') => read_block_body(cursor, open),
        found => Err(SyntaxError::ExpectedBlock {
            found,
            span: cursor.span_from(open),
        }),
    }
}

/// Read a function header and its body.
///
/// Whitespace-separated words are collected until `{`; the first is the
/// function name and the rest are parameters.
pub fn read_func_header<'a>(
    cursor: &mut SourceCursor<'a>,
) -> Result<(FuncHeader<'a>, Block<'a>), SyntaxError> {
    let header_start = cursor.pos();
    let mut words: Vec<(&'a str, Span)> = Vec::new();

    let open = loop {
        cursor.skip_whitespace();
        let start = cursor.pos();
        match cursor.peek() {
            None => {
                return Err(SyntaxError::ExpectedBlock {
                    found: None,
                    span: cursor.span_from(start),
                })
            }
            Some('{') => {
                cursor.next_char();
                break start;
            }
            Some(_) => {
                cursor.eat_while(|c| !c.is_whitespace() && c != '{');
                let word = cursor.slice(start, cursor.pos());
                let span = cursor.span_from(start);
                check_name(word, span)?;
                words.push((word, span));
            }
        }
    };

    let mut words = words.into_iter();
    let Some((name, name_span)) = words.next() else {
        return Err(SyntaxError::MissingFunctionName {
            span: cursor.span_from(header_start),
        });
    };

    let mut params = ParamList::new();
    for (param, span) in words {
        if params.contains(&param) {
            return Err(SyntaxError::DuplicateParameter {
                name: param.to_string(),
                span,
            });
        }
        params.push(param);
    }

    let body = read_block_body(cursor, open)?;
    Ok((
        FuncHeader {
            name,
            name_span,
            params,
        },
        body,
    ))
}

fn check_name(word: &str, span: Span) -> Result<(), SyntaxError> {
    if !is_identifier(word) {
        return Err(SyntaxError::InvalidName {
            name: word.to_string(),
            span,
        });
    }
    if Keyword::from_word(word).is_some() {
        return Err(SyntaxError::KeywordAsName {
            name: word.to_string(),
            span,
        });
    }
    Ok(())
}

/// Scan past the opening brace (already consumed at `open`) to its match.
fn read_block_body<'a>(cursor: &mut SourceCursor<'a>, open: usize) -> Result<Block<'a>, SyntaxError> {
    let body_start = cursor.pos();
    let mut depth: usize = 1;
    loop {
        let here = cursor.pos();
        match cursor.next_char() {
            None => {
                return Err(SyntaxError::UnbalancedBraces {
                    span: cursor.span_between(open, open + 1),
                })
            }
            Some('{') => depth += 1,
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    return Ok(Block {
                        body: cursor.slice(body_start, here),
                        span: cursor.span_between(body_start, here),
                    });
                }
            }
            Some('"') => skip_string(cursor),
            Some('#') => cursor.skip_line(),
            Some(_) => {}
        }
    }
}

/// Skip a string literal body, honoring backslash escapes.
fn skip_string(cursor: &mut SourceCursor<'_>) {
    while let Some(c) = cursor.next_char() {
        match c {
            '"' => return,
            '\\' => {
                cursor.next_char();
            }
            _ => {}
        }
    }
}
