//! The operand stack.
//!
//! One stack serves the whole run: literals, operators, nested blocks and
//! function calls all read and write it. Every removal names the operation
//! asking for it, so an underflow reports which token was short of operands.

use crate::errors::{operand_count, EvalError};
use crate::value::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<Value>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Fail unless at least `n` values are present.
    #[inline]
    pub fn require(&self, op: &str, n: usize) -> Result<(), EvalError> {
        if self.values.len() < n {
            return Err(operand_count(op, n, self.values.len()));
        }
        Ok(())
    }

    pub fn pop(&mut self, op: &str) -> Result<Value, EvalError> {
        self.values
            .pop()
            .ok_or_else(|| operand_count(op, 1, 0))
    }

    /// Pop two values as `(left, right)`; `right` was on top.
    ///
    /// Nothing is removed when fewer than two values are present.
    pub fn pop_pair(&mut self, op: &str) -> Result<(Value, Value), EvalError> {
        self.require(op, 2)?;
        let right = self.pop(op)?;
        let left = self.pop(op)?;
        Ok((left, right))
    }

    /// Pop `n` values, returned in push order (the top of stack last).
    pub fn pop_n(&mut self, op: &str, n: usize) -> Result<Vec<Value>, EvalError> {
        self.require(op, n)?;
        let at = self.values.len() - n;
        Ok(self.values.split_off(at))
    }

    /// `dup`: `a -- a a`
    pub fn dup(&mut self) -> Result<(), EvalError> {
        self.require("dup", 1)?;
        let top = self.values[self.values.len() - 1].clone();
        self.values.push(top);
        Ok(())
    }

    /// `twodup`: `a b -- a b a b`
    pub fn two_dup(&mut self) -> Result<(), EvalError> {
        self.require("twodup", 2)?;
        let len = self.values.len();
        self.values.extend_from_within(len - 2..);
        Ok(())
    }

    /// `swap`: `a b -- b a`
    pub fn swap(&mut self) -> Result<(), EvalError> {
        self.require("swap", 2)?;
        let len = self.values.len();
        self.values.swap(len - 1, len - 2);
        Ok(())
    }

    /// `over`: `a b c -- a b c a`
    pub fn over(&mut self) -> Result<(), EvalError> {
        self.require("over", 3)?;
        let third = self.values[self.values.len() - 3].clone();
        self.values.push(third);
        Ok(())
    }

    #[inline]
    pub fn top(&self) -> Option<&Value> {
        self.values.last()
    }

    /// Mutable access to the top value, for in-place unary operators.
    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut Value> {
        self.values.last_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bottom to top.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests;
