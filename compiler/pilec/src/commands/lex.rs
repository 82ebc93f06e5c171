//! The `lex` command: print the token stream of a file.

use pile_lexer::{next_token, LexError, SourceCursor};

use super::read_source;
use crate::reporting::line_col;

/// One line per token: `line:col kind`.
///
/// Block bodies are tokenized like any other text, so this shows exactly the
/// tokens the evaluator would see if every block ran.
pub fn lex_source(source: &str) -> Result<Vec<String>, LexError> {
    let mut cursor = SourceCursor::new(source);
    let mut lines = Vec::new();
    loop {
        let token = next_token(&mut cursor)?;
        if token.is_eof() {
            return Ok(lines);
        }
        let (line, col) = line_col(source, token.span.start);
        lines.push(format!("{line}:{col} {}", token.kind));
    }
}

/// Print the tokens of a file. Returns the process exit code.
pub fn lex_file(path: &str) -> i32 {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return 1;
        }
    };
    match lex_source(&source) {
        Ok(lines) => {
            println!("Tokens for '{path}' ({} tokens):", lines.len());
            for line in lines {
                println!("  {line}");
            }
            0
        }
        Err(err) => {
            let (line, col) = line_col(&source, err.span().start);
            eprintln!("{path}:{line}:{col}: lex error: {err}");
            1
        }
    }
}
