//! Live call tracking for error backtraces.
//!
//! Every function call pushes a [`CallFrame`]; return pops it. When an error
//! escapes a call, the frames are snapshotted into an [`EvalBacktrace`] so
//! the driver can show the chain of calls that led to it. Nesting limits are
//! enforced separately by `pile_stack::DepthGuard`, which also counts `loop`
//! and `if` blocks.

use std::rc::Rc;

use pile_lexer::Span;

use crate::errors::{BacktraceFrame, EvalBacktrace, EvalError};

#[derive(Clone, Debug)]
pub struct CallFrame {
    pub name: Rc<str>,
    /// Where the call was made, not where the function was defined.
    pub call_span: Span,
}

#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
}

impl CallStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: CallFrame) {
        self.frames.push(frame);
    }

    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Snapshot of the live frames, most recent call first.
    pub fn capture(&self) -> EvalBacktrace {
        let frames = self
            .frames
            .iter()
            .rev()
            .map(|f| BacktraceFrame {
                name: f.name.to_string(),
                call_span: f.call_span,
            })
            .collect();
        EvalBacktrace::new(frames)
    }

    /// Attach a backtrace unless the error already carries one from a deeper
    /// frame, or no call is active.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.frames.is_empty() || err.backtrace.is_some() {
            return err;
        }
        err.with_backtrace(self.capture())
    }
}
