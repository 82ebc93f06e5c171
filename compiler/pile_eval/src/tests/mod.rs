//! Evaluator test suites.
//!
//! Every suite runs programs through a `TestRun` interpreter, which captures
//! `print` output in a buffer.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

mod control_tests;

use crate::{EvalError, EvalMode, Interpreter, InterpreterBuilder, Scoping, Value};

fn interpreter() -> Interpreter {
    InterpreterBuilder::new().mode(EvalMode::TestRun).build()
}

/// Run `src`, panicking with the error message on failure.
fn run(src: &str) -> Interpreter {
    let mut interp = interpreter();
    if let Err(err) = interp.execute(src) {
        panic!("{src:?} failed: {err}");
    }
    interp
}

fn run_flat(src: &str) -> Interpreter {
    let mut interp = InterpreterBuilder::new()
        .mode(EvalMode::TestRun)
        .scoping(Scoping::Flat)
        .build();
    if let Err(err) = interp.execute(src) {
        panic!("{src:?} failed: {err}");
    }
    interp
}

fn run_err(src: &str) -> EvalError {
    let mut interp = interpreter();
    match interp.execute(src) {
        Ok(flow) => panic!("{src:?} should fail, finished with {flow:?}"),
        Err(err) => err,
    }
}

fn top(src: &str) -> Value {
    run(src).top().cloned().unwrap()
}

fn ints(interp: &Interpreter) -> Vec<i64> {
    interp.stack().iter().map(|v| v.as_int().unwrap()).collect()
}
