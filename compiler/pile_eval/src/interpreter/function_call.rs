//! Function call evaluation.

use std::rc::Rc;

use pile_lexer::{SourceCursor, Span};

use super::{ExecResult, Flow, Interpreter};
use crate::diagnostics::CallFrame;
use crate::environment::FunctionDef;

impl Interpreter {
    /// Call `def`, taking its arguments off the operand stack.
    ///
    /// The last declared parameter binds the top of stack. Bindings are
    /// undone on every exit path; a `break` that escapes the body only ends
    /// this call.
    #[tracing::instrument(level = "debug", skip_all, fields(name = %def.name))]
    pub(super) fn call_function(&mut self, def: &Rc<FunctionDef>, call_span: Span) -> ExecResult {
        let args = self.env.stack_mut().pop_n(&def.name, def.arity())?;
        self.env.enter_call(def, args);
        self.call_stack.push(CallFrame {
            name: Rc::clone(&def.name),
            call_span,
        });

        let result = self.nested(|this| {
            let mut body = SourceCursor::with_base(&def.body, def.body_offset);
            this.exec_block(&mut body)
        });

        self.call_stack.pop();
        self.env.leave_call(def);
        result.map(|_| Flow::Completed)
    }
}
