//! Run-wide mutable state: operand stack, function table, variables.
//!
//! Variables are dynamically scoped. A callee sees every binding visible at
//! its call site, and a name is resolved by walking frames from the innermost
//! call outward. How bindings made during a call are cleaned up afterwards is
//! selected by [`Scoping`].

use std::rc::Rc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use pile_lexer::{FuncHeader, Span};

use crate::operand_stack::OperandStack;
use crate::value::Value;

/// A function as stored in the function table. Never mutated after `func`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDef {
    pub name: Rc<str>,
    /// Declaration order; the last parameter binds the top of stack.
    pub params: SmallVec<[Rc<str>; 4]>,
    pub body: Rc<str>,
    /// Absolute offset of `body` in the program, for error positions.
    pub body_offset: usize,
    pub name_span: Span,
}

impl FunctionDef {
    pub fn new(header: &FuncHeader<'_>, body: &str, body_offset: usize) -> Self {
        FunctionDef {
            name: Rc::from(header.name),
            params: header.params.iter().map(|&p| Rc::from(p)).collect(),
            body: Rc::from(body),
            body_offset,
            name_span: header.name_span,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Lifetime of bindings created during a function call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scoping {
    /// Each call gets a frame holding its parameters and any name that `var`
    /// creates during the call. The frame is dropped when the call returns.
    #[default]
    CallFrames,
    /// One table for the whole run. Parameters are removed when the call
    /// returns; names created by `var` inside a body stay visible.
    Flat,
}

type Frame = FxHashMap<Rc<str>, Value>;

#[derive(Debug)]
pub struct Environment {
    stack: OperandStack,
    functions: FxHashMap<Rc<str>, Rc<FunctionDef>>,
    /// Innermost frame last. Never empty; `frames[0]` is the global frame.
    frames: Vec<Frame>,
    scoping: Scoping,
}

impl Environment {
    pub fn new(scoping: Scoping) -> Self {
        Environment {
            stack: OperandStack::new(),
            functions: FxHashMap::default(),
            frames: vec![Frame::default()],
            scoping,
        }
    }

    #[inline]
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    #[inline]
    pub fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }

    /// Store a definition, replacing any previous one with the same name.
    ///
    /// Returns `true` if an older definition was replaced.
    pub fn define_function(&mut self, def: FunctionDef) -> bool {
        let name = Rc::clone(&def.name);
        self.functions.insert(name, Rc::new(def)).is_some()
    }

    /// The current definition of `name`. The `Rc` keeps a running body alive
    /// even if the function redefines itself.
    pub fn function(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Bind `name`, overwriting the innermost existing binding if there is
    /// one, otherwise creating it in the innermost frame.
    pub fn assign(&mut self, name: &str, value: Value) {
        if let Some(slot) = self
            .frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.get_mut(name))
        {
            *slot = value;
            return;
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(Rc::from(name), value);
        }
    }

    /// Bind call arguments, given in declaration order.
    pub fn enter_call(&mut self, def: &FunctionDef, args: Vec<Value>) {
        debug_assert_eq!(def.params.len(), args.len());
        match self.scoping {
            Scoping::CallFrames => {
                let frame: Frame = def.params.iter().cloned().zip(args).collect();
                self.frames.push(frame);
            }
            Scoping::Flat => {
                if let Some(table) = self.frames.last_mut() {
                    for (param, arg) in def.params.iter().zip(args) {
                        table.insert(Rc::clone(param), arg);
                    }
                }
            }
        }
    }

    /// Undo the bindings of [`enter_call`](Self::enter_call).
    pub fn leave_call(&mut self, def: &FunctionDef) {
        match self.scoping {
            Scoping::CallFrames => {
                if self.frames.len() > 1 {
                    self.frames.pop();
                }
            }
            Scoping::Flat => {
                if let Some(table) = self.frames.last_mut() {
                    for param in &def.params {
                        table.remove(param);
                    }
                }
            }
        }
    }

    /// Number of live frames, including the global one.
    #[inline]
    pub fn frame_depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Scoping::default())
    }
}
