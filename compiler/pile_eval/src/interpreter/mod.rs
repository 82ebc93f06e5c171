//! Single-pass evaluator for Pile.
//!
//! # Architecture
//!
//! [`Interpreter::exec_block`] is the whole evaluator: it pulls one token at a
//! time from a [`SourceCursor`] and executes it immediately. Nothing is parsed
//! ahead. Block keywords scan their `{ ... }` body out of the raw text and
//! re-enter `exec_block` on a fresh cursor over that body:
//!
//! - `control.rs` - `func`, `var`, `loop`, `if`
//! - `function_call.rs` - argument binding and body execution
//!
//! Every re-entry goes through [`Interpreter::nested`], which enforces the
//! nesting limit and grows the native stack when needed.
//!
//! # Control flow
//!
//! A block finishes with [`Flow::Completed`] at end of input or
//! [`Flow::Break`] after `break`. `Break` travels outward through `if`
//! blocks, stops at the nearest `loop`, and ends a function body early. Any
//! error aborts the run.

mod builder;
mod control;
mod function_call;

pub use builder::InterpreterBuilder;

use std::rc::Rc;

use pile_lexer::{next_token, Keyword, SourceCursor, Span, SyntaxError, Token, TokenKind};
use pile_stack::{ensure_sufficient_stack, DepthGuard};

use crate::cancel::CancellationToken;
use crate::diagnostics::CallStack;
use crate::environment::{Environment, FunctionDef};
use crate::errors::{budget_exceeded, interrupted, recursion_limit, undefined_name, EvalError};
use crate::eval_mode::{EvalMode, ModeState};
use crate::operators::{evaluate_binary, evaluate_not, BinaryOp};
use crate::print_handler::SharedPrintHandler;
use crate::value::Value;

/// How a block finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Ran to the end of its text.
    Completed,
    /// Stopped at `break`.
    Break,
}

pub type ExecResult = Result<Flow, EvalError>;

/// Outcome of the most recent [`Interpreter::execute`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Completed,
    /// A `break` reached the top level.
    Halted,
    Failed,
}

impl RunStatus {
    pub fn from_result(result: &ExecResult) -> Self {
        match result {
            Ok(Flow::Completed) => RunStatus::Completed,
            Ok(Flow::Break) => RunStatus::Halted,
            Err(_) => RunStatus::Failed,
        }
    }

    /// Process exit code: 0, 2, or 1.
    pub fn code(self) -> i32 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::Failed => 1,
            RunStatus::Halted => 2,
        }
    }
}

/// The Pile evaluator.
///
/// State persists across calls to [`execute`](Self::execute): functions,
/// global variables and the operand stack left by one program are visible
/// to the next.
pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) mode: EvalMode,
    pub(crate) mode_state: ModeState,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) depth: DepthGuard,
    pub(crate) call_stack: CallStack,
    pub(crate) cancel: CancellationToken,
    pub(crate) status: Option<RunStatus>,
}

impl Interpreter {
    /// An interpreter in `Interpret` mode, printing to stdout.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Run a whole program.
    ///
    /// Spans in the returned error are byte offsets into the program text
    /// that contains the failing token. For a function defined by an earlier
    /// `execute`, that is the earlier program, and only the backtrace's
    /// innermost call site points into `source`.
    pub fn execute(&mut self, source: &str) -> ExecResult {
        let mut cursor = SourceCursor::new(source);
        let result = self.exec_block(&mut cursor);
        let status = RunStatus::from_result(&result);
        match &result {
            Ok(_) => tracing::debug!(?status, steps = self.mode_state.steps, "run finished"),
            Err(err) => tracing::debug!(?status, error = %err, "run failed"),
        }
        self.status = Some(status);
        result
    }

    /// Execute tokens until the cursor is exhausted or `break` runs.
    pub(crate) fn exec_block(&mut self, cursor: &mut SourceCursor<'_>) -> ExecResult {
        loop {
            self.check_interrupt()?;
            let token = next_token(cursor)?;
            if token.is_eof() {
                return Ok(Flow::Completed);
            }
            self.check_step()?;
            tracing::trace!(token = %token.kind, span = %token.span, "dispatch");

            let span = token.span;
            match self.dispatch(token, cursor) {
                Ok(Flow::Completed) => {}
                Ok(Flow::Break) => return Ok(Flow::Break),
                Err(err) => return Err(self.call_stack.attach_backtrace(err.or_span(span))),
            }
        }
    }

    fn dispatch<'a>(&mut self, token: Token<'a>, cursor: &mut SourceCursor<'a>) -> ExecResult {
        match token.kind {
            TokenKind::Int(n) => self.env.stack_mut().push(Value::Int(n)),
            TokenKind::Str(s) => self.env.stack_mut().push(Value::Str(s.into_owned())),
            TokenKind::Keyword(kw) => return self.exec_keyword(kw, cursor),
            TokenKind::Ident(name) => return self.exec_identifier(name, token.span),
            TokenKind::Op(c) => self.exec_operator(c, token.span)?,
            TokenKind::Eof => {}
        }
        Ok(Flow::Completed)
    }

    fn exec_keyword(&mut self, kw: Keyword, cursor: &mut SourceCursor<'_>) -> ExecResult {
        let stack = self.env.stack_mut();
        match kw {
            Keyword::Print => {
                let value = stack.pop("print")?;
                self.print_handler.print(&value.to_string());
            }
            Keyword::Dup => stack.dup()?,
            Keyword::TwoDup => stack.two_dup()?,
            Keyword::Swap => stack.swap()?,
            Keyword::Over => stack.over()?,
            Keyword::Break => return Ok(Flow::Break),
            Keyword::Func => self.exec_func(cursor)?,
            Keyword::Var => self.exec_var(cursor)?,
            Keyword::Loop => return self.exec_loop(cursor),
            Keyword::If => return self.exec_if(cursor),
        }
        Ok(Flow::Completed)
    }

    /// A function name calls it; a variable name pushes a copy of its value.
    fn exec_identifier(&mut self, name: &str, span: Span) -> ExecResult {
        if let Some(def) = self.env.function(name) {
            return self.call_function(&def, span);
        }
        match self.env.lookup(name) {
            Some(value) => {
                let value = value.clone();
                self.env.stack_mut().push(value);
                Ok(Flow::Completed)
            }
            None => Err(undefined_name(name)),
        }
    }

    fn exec_operator(&mut self, c: char, span: Span) -> Result<(), EvalError> {
        let stack = self.env.stack_mut();
        if c == '!' {
            stack.require("!", 1)?;
            if let Some(top) = stack.top_mut() {
                *top = evaluate_not(top)?;
            }
            return Ok(());
        }
        let Some(op) = BinaryOp::from_char(c) else {
            return Err(SyntaxError::InvalidCharacter { found: c, span }.into());
        };
        let (left, right) = stack.pop_pair(op.as_str())?;
        let result = evaluate_binary(left, right, op)?;
        stack.push(result);
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    pub(crate) fn nested<F>(&mut self, f: F) -> ExecResult
    where
        F: FnOnce(&mut Self) -> ExecResult,
    {
        self.depth
            .enter()
            .map_err(|exceeded| recursion_limit(exceeded.limit))?;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth.leave();
        result
    }

    #[inline]
    pub(crate) fn check_interrupt(&self) -> Result<(), EvalError> {
        if self.cancel.is_cancelled() {
            return Err(interrupted());
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn check_step(&mut self) -> Result<(), EvalError> {
        self.mode_state.check_step().map_err(budget_exceeded)
    }

    /// Operand stack, bottom to top.
    pub fn stack(&self) -> &[Value] {
        self.env.stack().as_slice()
    }

    pub fn top(&self) -> Option<&Value> {
        self.env.stack().top()
    }

    /// Current binding of a variable, innermost frame first.
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.env.lookup(name)
    }

    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.env.function(name)
    }

    /// `None` until the first program has run.
    pub fn status(&self) -> Option<RunStatus> {
        self.status
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Output captured by the print handler; empty for stdout.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Tokens executed so far, across all runs.
    pub fn steps(&self) -> u64 {
        self.mode_state.steps
    }

    /// A handle that cancels this interpreter from another thread.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
