#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;

fn stack_of(values: &[i64]) -> OperandStack {
    let mut stack = OperandStack::new();
    for &v in values {
        stack.push(Value::int(v));
    }
    stack
}

fn ints(stack: &OperandStack) -> Vec<i64> {
    stack
        .as_slice()
        .iter()
        .map(|v| match v {
            Value::Int(n) => *n,
            Value::Str(_) => panic!("unexpected string on stack"),
        })
        .collect()
}

#[test]
fn pop_pair_returns_left_then_right() {
    let mut stack = stack_of(&[1, 2]);
    let (left, right) = stack.pop_pair("-").unwrap();
    assert_eq!(left, Value::int(1));
    assert_eq!(right, Value::int(2));
    assert!(stack.is_empty());
}

#[test]
fn pop_pair_underflow_keeps_stack() {
    let mut stack = stack_of(&[5]);
    let err = stack.pop_pair("+").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::OperandCount {
            op: "+".to_string(),
            required: 2,
            available: 1,
        }
    );
    assert_eq!(ints(&stack), vec![5]);
}

#[test]
fn pop_empty_is_operand_count() {
    let mut stack = OperandStack::new();
    let err = stack.pop("print").unwrap_err();
    assert!(matches!(
        err.kind,
        EvalErrorKind::OperandCount { required: 1, available: 0, .. }
    ));
}

#[test]
fn pop_n_preserves_push_order() {
    let mut stack = stack_of(&[9, 1, 2, 3]);
    let args = stack.pop_n("f", 3).unwrap();
    assert_eq!(args, vec![Value::int(1), Value::int(2), Value::int(3)]);
    assert_eq!(ints(&stack), vec![9]);
}

#[test]
fn pop_n_zero_is_empty() {
    let mut stack = stack_of(&[1]);
    assert!(stack.pop_n("f", 0).unwrap().is_empty());
    assert_eq!(stack.len(), 1);
}

#[test]
fn manipulators() {
    let mut stack = stack_of(&[1, 2, 3]);
    stack.dup().unwrap();
    assert_eq!(ints(&stack), vec![1, 2, 3, 3]);

    let mut stack = stack_of(&[1, 2]);
    stack.two_dup().unwrap();
    assert_eq!(ints(&stack), vec![1, 2, 1, 2]);

    let mut stack = stack_of(&[1, 2]);
    stack.swap().unwrap();
    assert_eq!(ints(&stack), vec![2, 1]);

    let mut stack = stack_of(&[1, 2, 3]);
    stack.over().unwrap();
    assert_eq!(ints(&stack), vec![1, 2, 3, 1]);
}

#[test]
fn manipulators_check_operands() {
    assert!(OperandStack::new().dup().is_err());
    assert!(stack_of(&[1]).two_dup().is_err());
    assert!(stack_of(&[1]).swap().is_err());
    assert!(stack_of(&[1, 2]).over().is_err());
}
