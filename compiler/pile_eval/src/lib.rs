//! Pile Eval - single-pass evaluator for Pile programs.
//!
//! There is no AST. The [`Interpreter`] pulls tokens straight from a
//! [`SourceCursor`](pile_lexer::SourceCursor) and executes each one against
//! its [`Environment`]. Block keywords (`func`, `loop`, `if`) carve their
//! body out of the source text and re-enter the evaluator on a fresh cursor.
//!
//! # Architecture
//!
//! - `Value`: integer or string scalar
//! - `OperandStack`: the one stack shared by every nested block and call
//! - `Environment`: operand stack, function table, and variable frames
//! - `evaluate_binary` / `evaluate_not`: operator semantics
//! - `Interpreter`: token dispatch and control flow, returning [`Flow`]
//!
//! Control flow travels through the result type: `Ok(Flow::Break)` unwinds
//! to the nearest `loop`, and `Err(EvalError)` aborts the whole run.

mod cancel;
mod diagnostics;
mod environment;
pub mod errors;
mod eval_mode;
pub mod interpreter;
mod operand_stack;
mod operators;
mod print_handler;
mod value;

#[cfg(test)]
mod tests;

pub use cancel::CancellationToken;
pub use diagnostics::{CallFrame, CallStack};
pub use environment::{Environment, FunctionDef, Scoping};
pub use errors::{BacktraceFrame, ErrorClass, EvalBacktrace, EvalError, EvalErrorKind};
pub use eval_mode::{EvalMode, ModeState};
pub use interpreter::{ExecResult, Flow, Interpreter, InterpreterBuilder, RunStatus};
pub use operand_stack::OperandStack;
pub use operators::{evaluate_binary, evaluate_not, BinaryOp};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
