//! Operator semantics.
//!
//! The set of operators is fixed, so dispatch is a plain `match` on
//! [`BinaryOp`] and the operand types. Integer arithmetic is checked: an
//! overflowing result is an `IntegerOverflow` error, never a wrapped value.
//! Comparisons and logical operators yield `0` or `1`.

use std::fmt;

use crate::errors::{
    binary_type_mismatch, division_by_zero, index_out_of_range, integer_overflow, EvalError,
};
use crate::value::Value;

/// Binary operators, each written as one character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Lt,
    Gt,
    Eq,
    And,
    Or,
    /// `.`: character of a string at an index.
    Index,
}

impl BinaryOp {
    pub fn from_char(c: char) -> Option<BinaryOp> {
        let op = match c {
            '+' => BinaryOp::Add,
            '-' => BinaryOp::Sub,
            '*' => BinaryOp::Mul,
            '/' => BinaryOp::Div,
            '%' => BinaryOp::Rem,
            '^' => BinaryOp::Pow,
            '<' => BinaryOp::Lt,
            '>' => BinaryOp::Gt,
            '=' => BinaryOp::Eq,
            '&' => BinaryOp::And,
            '|' => BinaryOp::Or,
            '.' => BinaryOp::Index,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Eq => "=",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Index => ".",
        }
    }

    pub fn as_char(self) -> char {
        self.as_str().chars().next().unwrap_or('?')
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply `op` to two operands. `right` is the value that was on top.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(a, b, op),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, &b, op),
        (Value::Str(s), Value::Int(i)) if op == BinaryOp::Index => index_string(&s, i),
        (left, right) => Err(mismatch(op, &left, &right)),
    }
}

/// `!`: `1` if the operand is not truthy, else `0`.
pub fn evaluate_not(value: &Value) -> Result<Value, EvalError> {
    Ok(Value::bool(!value.is_truthy()?))
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> Result<Value, EvalError> {
    let op_char = op.as_char();
    let checked = |result: Option<i64>| result.map(Value::Int).ok_or_else(|| integer_overflow(op_char));
    match op {
        BinaryOp::Add => checked(a.checked_add(b)),
        BinaryOp::Sub => checked(a.checked_sub(b)),
        BinaryOp::Mul => checked(a.checked_mul(b)),
        BinaryOp::Div | BinaryOp::Rem if b == 0 => Err(division_by_zero(op_char)),
        BinaryOp::Div => checked(a.checked_div(b)),
        BinaryOp::Rem => checked(a.checked_rem(b)),
        BinaryOp::Pow => int_pow(a, b).map(Value::Int),
        BinaryOp::Lt => Ok(Value::bool(a < b)),
        BinaryOp::Gt => Ok(Value::bool(a > b)),
        BinaryOp::Eq => Ok(Value::bool(a == b)),
        BinaryOp::And => Ok(Value::bool(a > 0 && b > 0)),
        BinaryOp::Or => Ok(Value::bool(a > 0 || b > 0)),
        BinaryOp::Index => Err(binary_type_mismatch(op_char, "int", "int")),
    }
}

fn eval_string_binary(mut a: String, b: &str, op: BinaryOp) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => {
            a.push_str(b);
            Ok(Value::Str(a))
        }
        BinaryOp::Lt => Ok(Value::bool(a.as_str() < b)),
        BinaryOp::Gt => Ok(Value::bool(a.as_str() > b)),
        BinaryOp::Eq => Ok(Value::bool(a == b)),
        _ => Err(binary_type_mismatch(op.as_char(), "str", "str")),
    }
}

/// Floor of `base` raised to `exp`, computed exactly.
///
/// Negative exponents give a magnitude below one unless `|base| == 1`, so
/// the floor is `0` for a positive result and `-1` for a negative one.
fn int_pow(base: i64, exp: i64) -> Result<i64, EvalError> {
    let odd = exp % 2 != 0;
    match base {
        0 if exp < 0 => return Err(division_by_zero('^')),
        0 => return Ok(i64::from(exp == 0)),
        1 => return Ok(1),
        -1 => return Ok(if odd { -1 } else { 1 }),
        _ => {}
    }
    if exp < 0 {
        let negative = base < 0 && odd;
        return Ok(if negative { -1 } else { 0 });
    }
    u32::try_from(exp)
        .ok()
        .and_then(|e| base.checked_pow(e))
        .ok_or_else(|| integer_overflow('^'))
}

fn index_string(s: &str, index: i64) -> Result<Value, EvalError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| s.chars().nth(i))
        .map(|c| Value::Str(c.to_string()))
        .ok_or_else(|| index_out_of_range(index, s.chars().count()))
}

#[cold]
fn mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    binary_type_mismatch(op.as_char(), left.type_name(), right.type_name())
}

#[cfg(test)]
mod tests;
