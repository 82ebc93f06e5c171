//! Runtime values.
//!
//! Pile has exactly two scalar types. Values are owned and copied on `dup`,
//! variable reads, and parameter binding; nothing is shared.

use std::fmt;

use crate::errors::{type_mismatch, EvalError};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    /// Factory for an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Factory for a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// `1` for true, `0` for false.
    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Int(i64::from(b))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
        }
    }

    pub fn as_int(&self) -> Result<i64, EvalError> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Str(_) => Err(type_mismatch("int", self.type_name())),
        }
    }

    pub fn as_str(&self) -> Result<&str, EvalError> {
        match self {
            Value::Str(s) => Ok(s),
            Value::Int(_) => Err(type_mismatch("str", self.type_name())),
        }
    }

    pub fn into_string(self) -> Result<String, EvalError> {
        match self {
            Value::Str(s) => Ok(s),
            Value::Int(_) => Err(type_mismatch("str", "int")),
        }
    }

    /// Any integer greater than zero is true. Strings have no truthiness.
    pub fn is_truthy(&self) -> Result<bool, EvalError> {
        Ok(self.as_int()? > 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}
