//! `InterpreterBuilder` for creating configured `Interpreter` instances.

use pile_stack::DepthGuard;

use super::Interpreter;
use crate::cancel::CancellationToken;
use crate::diagnostics::CallStack;
use crate::environment::{Environment, Scoping};
use crate::eval_mode::{EvalMode, ModeState};
use crate::print_handler::SharedPrintHandler;

/// Builder for [`Interpreter`].
///
/// Anything left unset falls back to the mode's default:
/// - `EvalMode::Interpret` for `pile run` (stdout, depth 10 000)
/// - `EvalMode::TestRun` for tests (captured output, depth 500)
/// - `EvalMode::Bounded { .. }` for untrusted programs (step budget, depth 256)
#[derive(Default)]
pub struct InterpreterBuilder {
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
    scoping: Scoping,
    max_depth: Option<usize>,
    cancel: Option<CancellationToken>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the mode-based default.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn scoping(mut self, scoping: Scoping) -> Self {
        self.scoping = scoping;
        self
    }

    /// Maximum nesting of `loop`, `if` and calls. Overrides the mode's limit.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Share a cancellation flag with the host.
    #[must_use]
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> Interpreter {
        let print_handler = self
            .print_handler
            .unwrap_or_else(|| self.mode.default_print_handler());
        let max_depth = self.max_depth.unwrap_or_else(|| self.mode.max_depth());
        Interpreter {
            env: Environment::new(self.scoping),
            mode_state: ModeState::new(&self.mode),
            mode: self.mode,
            print_handler,
            depth: DepthGuard::new(Some(max_depth)),
            call_stack: CallStack::new(),
            cancel: self.cancel.unwrap_or_default(),
            status: None,
        }
    }
}
