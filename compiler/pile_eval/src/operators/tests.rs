#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::{ErrorClass, EvalErrorKind};
use pretty_assertions::assert_eq;

fn int(op: char, a: i64, b: i64) -> Result<Value, EvalError> {
    evaluate_binary(Value::int(a), Value::int(b), BinaryOp::from_char(op).unwrap())
}

fn str_op(op: char, a: &str, b: &str) -> Result<Value, EvalError> {
    evaluate_binary(Value::string(a), Value::string(b), BinaryOp::from_char(op).unwrap())
}

#[test]
fn char_codes_round_trip() {
    for c in "+-*/%^<>=&|.".chars() {
        assert_eq!(BinaryOp::from_char(c).unwrap().as_char(), c);
    }
    assert_eq!(BinaryOp::from_char('!'), None);
    assert_eq!(BinaryOp::from_char('@'), None);
}

#[test]
fn integer_arithmetic() {
    assert_eq!(int('+', 2, 3).unwrap(), Value::int(5));
    assert_eq!(int('-', 2, 3).unwrap(), Value::int(-1));
    assert_eq!(int('*', 4, 3).unwrap(), Value::int(12));
    assert_eq!(int('/', 7, 2).unwrap(), Value::int(3));
    assert_eq!(int('/', -7, 2).unwrap(), Value::int(-3));
    assert_eq!(int('%', 4, 3).unwrap(), Value::int(1));
    assert_eq!(int('^', 2, 5).unwrap(), Value::int(32));
    assert_eq!(int('^', 7, 0).unwrap(), Value::int(1));
}

#[test]
fn division_by_zero_is_explicit() {
    for op in ['/', '%'] {
        let err = int(op, 1, 0).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero { op });
        assert_eq!(err.class(), ErrorClass::DivisionByZero);
    }
    assert_eq!(int('^', 0, -1).unwrap_err().class(), ErrorClass::DivisionByZero);
}

#[test]
fn overflow_is_an_error() {
    let err = int('+', i64::MAX, 1).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::IntegerOverflow { op: '+' });
    assert!(int('*', i64::MAX, 2).is_err());
    assert!(int('/', i64::MIN, -1).is_err());
    assert!(int('^', 2, 64).is_err());
    assert!(int('^', 10, i64::MAX).is_err());
}

#[test]
fn power_floors_negative_exponents() {
    assert_eq!(int('^', 2, -1).unwrap(), Value::int(0));
    assert_eq!(int('^', -2, -1).unwrap(), Value::int(-1));
    assert_eq!(int('^', -2, -2).unwrap(), Value::int(0));
    assert_eq!(int('^', 1, -5).unwrap(), Value::int(1));
    assert_eq!(int('^', -1, -3).unwrap(), Value::int(-1));
    assert_eq!(int('^', -1, i64::MAX).unwrap(), Value::int(-1));
    assert_eq!(int('^', 0, i64::MAX).unwrap(), Value::int(0));
    assert_eq!(int('^', 0, 0).unwrap(), Value::int(1));
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_eq!(int('<', 1, 2).unwrap(), Value::int(1));
    assert_eq!(int('>', 1, 2).unwrap(), Value::int(0));
    assert_eq!(int('=', 2, 3).unwrap(), Value::int(0));
    assert_eq!(int('=', 3, 3).unwrap(), Value::int(1));
    assert_eq!(str_op('<', "abc", "abd").unwrap(), Value::int(1));
    assert_eq!(str_op('=', "x", "x").unwrap(), Value::int(1));
    assert_eq!(str_op('>', "a", "b").unwrap(), Value::int(0));
}

#[test]
fn logical_operators_use_truthiness() {
    assert_eq!(int('&', 1, 5).unwrap(), Value::int(1));
    assert_eq!(int('&', 1, 0).unwrap(), Value::int(0));
    assert_eq!(int('&', -1, 1).unwrap(), Value::int(0));
    assert_eq!(int('|', 0, 3).unwrap(), Value::int(1));
    assert_eq!(int('|', 0, -3).unwrap(), Value::int(0));
}

#[test]
fn string_concatenation() {
    assert_eq!(str_op('+', "foo", "bar").unwrap(), Value::string("foobar"));
    assert_eq!(str_op('+', "", "").unwrap(), Value::string(""));
}

#[test]
fn mixed_types_are_argument_errors() {
    let err = evaluate_binary(Value::int(1), Value::string("a"), BinaryOp::Add).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::BinaryTypeMismatch {
            op: '+',
            left: "int",
            right: "str",
        }
    );
    assert_eq!(err.class(), ErrorClass::Argument);
    assert!(str_op('-', "a", "b").is_err());
    assert!(str_op('&', "a", "b").is_err());
    assert!(evaluate_binary(Value::string("a"), Value::int(1), BinaryOp::Eq).is_err());
}

#[test]
fn string_indexing() {
    let at = |s: &str, i: i64| evaluate_binary(Value::string(s), Value::int(i), BinaryOp::Index);
    assert_eq!(at("hello", 0).unwrap(), Value::string("h"));
    assert_eq!(at("hello", 4).unwrap(), Value::string("o"));
    assert_eq!(at("héllo", 1).unwrap(), Value::string("é"));
    assert_eq!(
        at("hello", 5).unwrap_err().kind,
        EvalErrorKind::IndexOutOfRange { index: 5, len: 5 }
    );
    assert!(at("hello", -1).is_err());
    assert!(evaluate_binary(Value::int(1), Value::string("a"), BinaryOp::Index).is_err());
}

#[test]
fn not_negates_truthiness() {
    assert_eq!(evaluate_not(&Value::int(0)).unwrap(), Value::int(1));
    assert_eq!(evaluate_not(&Value::int(-4)).unwrap(), Value::int(1));
    assert_eq!(evaluate_not(&Value::int(7)).unwrap(), Value::int(0));
    let err = evaluate_not(&Value::string("x")).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::TypeMismatch { expected: "int", got: "str" });
}
