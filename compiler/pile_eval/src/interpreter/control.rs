//! Block keywords: `func`, `var`, `loop`, `if`.
//!
//! Each of these consumes raw text after the keyword. `func`, `loop` and `if`
//! scan a balanced `{ ... }` body with `pile_lexer`'s block scanner; the body
//! is then run through [`Interpreter::nested`] on its own cursor, leaving the
//! outer cursor positioned just past the closing brace.

use pile_lexer::{next_token, read_block, read_func_header, SourceCursor, TokenKind};

use super::{ExecResult, Flow, Interpreter};
use crate::environment::FunctionDef;
use crate::errors::{expected_identifier, EvalError};

impl Interpreter {
    /// `func <name> <param>* { body }`
    pub(super) fn exec_func(&mut self, cursor: &mut SourceCursor<'_>) -> Result<(), EvalError> {
        let (header, block) = read_func_header(cursor)?;
        let def = FunctionDef::new(&header, block.body, block.span.start);
        let arity = def.arity();
        let replaced = self.env.define_function(def);
        tracing::debug!(name = header.name, arity, replaced, "function defined");
        Ok(())
    }

    /// `var <name>`: pop the top of stack into `name`.
    pub(super) fn exec_var(&mut self, cursor: &mut SourceCursor<'_>) -> Result<(), EvalError> {
        let token = next_token(cursor)?;
        let TokenKind::Ident(name) = token.kind else {
            return Err(expected_identifier(&token.kind).or_span(token.span));
        };
        let value = self.env.stack_mut().pop("var")?;
        self.env.assign(name, value);
        Ok(())
    }

    /// `loop { body }`: run the body until it breaks.
    ///
    /// A `break` anywhere in the body, including inside nested `if`s, ends
    /// the loop; the loop itself then completes normally.
    pub(super) fn exec_loop(&mut self, cursor: &mut SourceCursor<'_>) -> ExecResult {
        let block = read_block(cursor)?;
        let mut body = block.cursor();
        let mut iterations: u64 = 0;
        self.nested(|this| loop {
            this.check_interrupt()?;
            // Counted so that an empty body still exhausts a step budget.
            this.check_step()?;
            iterations += 1;
            match this.exec_block(&mut body)? {
                Flow::Break => {
                    tracing::debug!(iterations, "loop exited");
                    return Ok(Flow::Completed);
                }
                Flow::Completed => body.reset(),
            }
        })
    }

    /// `if { body }`: pop a condition and run the body once if it is truthy.
    ///
    /// A `break` in the body propagates to the enclosing loop.
    pub(super) fn exec_if(&mut self, cursor: &mut SourceCursor<'_>) -> ExecResult {
        let block = read_block(cursor)?;
        let condition = self.env.stack_mut().pop("if")?;
        if !condition.is_truthy()? {
            return Ok(Flow::Completed);
        }
        let mut body = block.cursor();
        self.nested(|this| this.exec_block(&mut body))
    }
}
