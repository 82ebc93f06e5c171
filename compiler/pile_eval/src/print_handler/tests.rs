#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn buffer_handler_appends_without_separator() {
    let handler = BufferPrintHandler::new();
    handler.print("1");
    handler.print("2");
    handler.print("hello");
    assert_eq!(handler.get_output(), "12hello");
}

#[test]
fn buffer_handler_clear_empties_buffer() {
    let handler = BufferPrintHandler::new();
    handler.print("hello");
    assert!(!handler.get_output().is_empty());
    handler.clear();
    assert!(handler.get_output().is_empty());
}

#[test]
fn stdout_handler_get_output_returns_empty() {
    let handler = StdoutPrintHandler;
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.print("world");
    assert_eq!(handler.get_output(), "");
}

#[test]
fn buffer_handler_factory_creates_working_handler() {
    let handler = buffer_handler();
    handler.print("test");
    assert_eq!(handler.get_output(), "test");
}

#[test]
fn buffer_handler_is_thread_safe() {
    use std::thread;

    let handler = buffer_handler();
    let handler2 = handler.clone();

    let t1 = thread::spawn(move || {
        for _ in 0..100 {
            handler2.print("a");
        }
    });

    for _ in 0..100 {
        handler.print("b");
    }

    t1.join().unwrap();

    let output = handler.get_output();
    assert_eq!(output.len(), 200);
    assert_eq!(output.matches('a').count(), 100);
}
