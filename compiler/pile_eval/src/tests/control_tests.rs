//! `func`, `var`, `loop`, `if` and `break`.

use pretty_assertions::assert_eq;

use super::{interpreter, ints, run, top};
use crate::{Flow, RunStatus, Value};

#[test]
fn parameters_bind_in_declaration_order() {
    assert_eq!(
        top("func sum4 a b c d { a b + c + d + } 1 2 3 4 sum4"),
        Value::int(10)
    );
    assert_eq!(top("func sub a b { a b - } 10 3 sub"), Value::int(7));
}

#[test]
fn function_without_parameters() {
    assert_eq!(ints(&run("func three { 3 } three three +")), vec![6]);
}

#[test]
fn definition_does_not_execute_body() {
    let interp = run("func noisy { 1 print } 7");
    assert_eq!(interp.output(), "");
    assert_eq!(ints(&interp), vec![7]);
}

#[test]
fn redefinition_replaces_body_and_params() {
    let interp = run("func f a { a 1 + } func f a b { a b * } 3 4 f");
    assert_eq!(ints(&interp), vec![12]);
    let def = interp.function("f").unwrap();
    assert_eq!(def.arity(), 2);
    assert_eq!(&*def.body, " a b * ");
}

#[test]
fn function_redefining_itself_finishes_old_body() {
    let interp = run("func f { func f { 2 } 1 } f f");
    assert_eq!(ints(&interp), vec![1, 2]);
}

#[test]
fn recursion() {
    let src = "func fact n { n 1 > if { n 1 - fact n * break } 1 } 5 fact";
    // `break` ends the call early, so the base-case `1` is only pushed at n = 1.
    assert_eq!(top(src), Value::int(120));
}

#[test]
fn var_binds_top_of_stack() {
    let interp = run("1 2 var x");
    assert_eq!(ints(&interp), vec![1]);
    assert_eq!(interp.variable("x"), Some(&Value::int(2)));
}

#[test]
fn var_overwrites() {
    let interp = run("1 var x 2 var x x");
    assert_eq!(ints(&interp), vec![2]);
}

#[test]
fn loop_terminates_on_break() {
    let interp = run("0 var x loop { x break } ");
    assert_eq!(interp.variable("x"), Some(&Value::int(0)));
    assert_eq!(interp.top(), Some(&Value::int(0)));
    assert_eq!(interp.status(), Some(RunStatus::Completed));
}

#[test]
fn counting_loop() {
    let src = "0 var i loop { i 5 = if { break } i print i 1 + var i }";
    let interp = run(src);
    assert_eq!(interp.output(), "01234");
    assert_eq!(interp.variable("i"), Some(&Value::int(5)));
}

#[test]
fn break_exits_only_innermost_loop() {
    let src = "0 var n loop { loop { break } n 1 + var n n 3 = if { break } }";
    let interp = run(src);
    assert_eq!(interp.variable("n"), Some(&Value::int(3)));
}

#[test]
fn code_after_break_is_skipped() {
    let interp = run("loop { 1 break 2 } 3");
    assert_eq!(ints(&interp), vec![1, 3]);
}

#[test]
fn if_runs_body_when_truthy() {
    assert_eq!(top("1 if { 1 1 + 1 - }"), Value::int(1));
    assert_eq!(ints(&run("5 if { 9 }")), vec![9]);
}

#[test]
fn if_skips_body_when_falsy() {
    assert!(run("0 if { 1 3 + 3 - }").stack().is_empty());
}

#[test]
fn negative_condition_is_falsy() {
    // `-` is an operator, so build -1 arithmetically.
    assert_eq!(ints(&run("7 0 1 - if { 1 }")), vec![7]);
}

#[test]
fn nested_if_blocks() {
    let interp = run("1 if { 1 if { 0 if { 9 } 2 } 3 }");
    assert_eq!(ints(&interp), vec![2, 3]);
}

#[test]
fn break_escapes_if_to_enclosing_loop() {
    let interp = run("loop { 1 if { 1 if { break } } 99 } 5");
    assert_eq!(ints(&interp), vec![5]);
}

#[test]
fn break_in_function_ends_the_call_only() {
    let interp = run("func f { 1 break 2 } loop { f 3 break } 4");
    assert_eq!(ints(&interp), vec![1, 3, 4]);
}

#[test]
fn break_at_top_level_halts() {
    let mut interp = interpreter();
    let flow = interp.execute("1 break 2").unwrap();
    assert_eq!(flow, Flow::Break);
    assert_eq!(interp.status(), Some(RunStatus::Halted));
    assert_eq!(RunStatus::Halted.code(), 2);
    assert_eq!(ints(&interp), vec![1]);
}

#[test]
fn break_inside_top_level_if_halts() {
    let mut interp = interpreter();
    assert_eq!(interp.execute("1 if { break } 2").unwrap(), Flow::Break);
    assert!(interp.stack().is_empty());
}

#[test]
fn loop_inside_function() {
    let src = "func count n { 0 var c loop { c n = if { break } c 1 + var c } c } 4 count";
    assert_eq!(top(src), Value::int(4));
}

#[test]
fn function_defined_inside_loop_body() {
    let interp = run("loop { func g { 42 } break } g");
    assert_eq!(ints(&interp), vec![42]);
}

#[test]
fn braces_in_strings_inside_blocks() {
    let interp = run("1 if { \"}\" print } 2");
    assert_eq!(interp.output(), "}");
    assert_eq!(ints(&interp), vec![2]);
}
