//! Evaluation errors.
//!
//! An [`EvalError`] is a structured [`EvalErrorKind`] plus the span of the
//! offending token and, when raised inside a function call, a backtrace of
//! the active calls. Every kind belongs to one [`ErrorClass`], the coarse
//! category reported to users.
//!
//! Factory functions (`undefined_name()`, `division_by_zero()`, ...) are the
//! public way to build errors.

use std::fmt;

use pile_lexer::{LexError, Span, SyntaxError};

/// Coarse error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// Malformed token.
    Lex,
    /// Unbalanced braces, bad block shape, invalid character.
    Syntax,
    /// Undeclared identifier, or `var` without a name.
    Name,
    /// Wrong value type, index out of range, integer overflow.
    Argument,
    /// Too few operands on the stack.
    OperandCount,
    /// Integer division or remainder by zero.
    DivisionByZero,
    /// Nesting limit, step budget, or cancellation.
    Resource,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lex => "lex error",
            Self::Syntax => "syntax error",
            Self::Name => "name error",
            Self::Argument => "argument error",
            Self::OperandCount => "operand count error",
            Self::DivisionByZero => "arithmetic error",
            Self::Resource => "resource error",
        };
        f.write_str(s)
    }
}

/// Typed error category with the data needed for a message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("undeclared variable/function: \"{name}\"")]
    UndefinedName { name: String },
    #[error("`var` must be followed by an identifier, found {found}")]
    ExpectedIdentifier { found: String },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("operator `{op}` cannot be applied to {left} and {right}")]
    BinaryTypeMismatch {
        op: char,
        left: &'static str,
        right: &'static str,
    },
    #[error("index {index} out of range for string of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
    #[error("integer overflow in `{op}`")]
    IntegerOverflow { op: char },

    #[error("`{op}` needs {required} operand(s), but the stack holds {available}")]
    OperandCount {
        op: String,
        required: usize,
        available: usize,
    },

    #[error("division by zero in `{op}`")]
    DivisionByZero { op: char },

    #[error("maximum nesting depth exceeded (limit: {limit})")]
    RecursionLimit { limit: usize },
    #[error("step budget of {budget} tokens exhausted")]
    BudgetExceeded { budget: u64 },
    #[error("execution cancelled")]
    Interrupted,
}

impl EvalErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Lex(_) => ErrorClass::Lex,
            Self::Syntax(_) => ErrorClass::Syntax,
            Self::UndefinedName { .. } | Self::ExpectedIdentifier { .. } => ErrorClass::Name,
            Self::TypeMismatch { .. }
            | Self::BinaryTypeMismatch { .. }
            | Self::IndexOutOfRange { .. }
            | Self::IntegerOverflow { .. } => ErrorClass::Argument,
            Self::OperandCount { .. } => ErrorClass::OperandCount,
            Self::DivisionByZero { .. } => ErrorClass::DivisionByZero,
            Self::RecursionLimit { .. } | Self::BudgetExceeded { .. } | Self::Interrupted => {
                ErrorClass::Resource
            }
        }
    }
}

/// One active function call at the error site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub name: String,
    /// Where the call was made.
    pub call_span: Span,
}

/// Snapshot of the call stack at an error site, most recent call first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Span of the token being executed when the error was raised.
    pub span: Option<Span>,
    /// Active function calls, if the error was raised inside one.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            backtrace: None,
        }
    }

    #[inline]
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Attach a span unless a more precise one is already present.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.class(), self.kind)
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

impl From<LexError> for EvalError {
    fn from(err: LexError) -> Self {
        let span = err.span();
        EvalError::from_kind(EvalErrorKind::Lex(err)).or_span(span)
    }
}

impl From<SyntaxError> for EvalError {
    fn from(err: SyntaxError) -> Self {
        let span = err.span();
        EvalError::from_kind(EvalErrorKind::Syntax(err)).or_span(span)
    }
}

// Name Errors

#[cold]
pub fn undefined_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedName {
        name: name.to_string(),
    })
}

#[cold]
pub fn expected_identifier(found: impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedIdentifier {
        found: found.to_string(),
    })
}

// Argument Errors

#[cold]
pub fn type_mismatch(expected: &'static str, got: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch { expected, got })
}

#[cold]
pub fn binary_type_mismatch(op: char, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

#[cold]
pub fn index_out_of_range(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfRange { index, len })
}

#[cold]
pub fn integer_overflow(op: char) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow { op })
}

// Stack Errors

#[cold]
pub fn operand_count(op: &str, required: usize, available: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandCount {
        op: op.to_string(),
        required,
        available,
    })
}

// Arithmetic Errors

#[cold]
pub fn division_by_zero(op: char) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero { op })
}

// Resource Errors

#[cold]
pub fn recursion_limit(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::RecursionLimit { limit })
}

#[cold]
pub fn budget_exceeded(budget: u64) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BudgetExceeded { budget })
}

#[cold]
pub fn interrupted() -> EvalError {
    EvalError::from_kind(EvalErrorKind::Interrupted)
}
