use super::*;

#[test]
fn default_is_interpret() {
    assert_eq!(EvalMode::default(), EvalMode::Interpret);
}

#[test]
fn depth_limits_per_mode() {
    assert_eq!(EvalMode::Interpret.max_depth(), 10_000);
    assert_eq!(EvalMode::TestRun.max_depth(), 500);
    assert_eq!(EvalMode::Bounded { budget: 10 }.max_depth(), 256);
}

#[test]
fn only_bounded_has_a_budget() {
    assert_eq!(EvalMode::Interpret.step_budget(), None);
    assert_eq!(EvalMode::TestRun.step_budget(), None);
    assert_eq!(EvalMode::Bounded { budget: 7 }.step_budget(), Some(7));
}

#[test]
fn test_run_captures_output() {
    let handler = EvalMode::TestRun.default_print_handler();
    handler.print("x");
    assert_eq!(handler.get_output(), "x");
}

#[test]
fn unbounded_state_never_fails() {
    let mut state = ModeState::new(&EvalMode::Interpret);
    for _ in 0..1000 {
        assert!(state.check_step().is_ok());
    }
    assert_eq!(state.steps, 1000);
}

#[test]
fn bounded_state_fails_after_budget() {
    let mut state = ModeState::new(&EvalMode::Bounded { budget: 3 });
    assert!(state.check_step().is_ok());
    assert!(state.check_step().is_ok());
    assert!(state.check_step().is_ok());
    assert_eq!(state.check_step(), Err(3));
}
