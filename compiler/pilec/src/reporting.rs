//! Rendering evaluation errors for the terminal.

use std::fmt::Write;

use pile_eval::EvalError;

/// Frames shown before the rest of a backtrace is elided.
const MAX_BACKTRACE_FRAMES: usize = 16;

/// 1-based line and column (in characters) of a byte offset.
///
/// Offsets past the end clamp to the end of the text; an offset inside a
/// multi-byte character counts as that character.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let mut end = offset.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count() + 1;
    (line, col)
}

/// `path:line:col: class: message`, followed by the call backtrace.
pub fn render_error(path: &str, source: &str, err: &EvalError) -> String {
    let mut out = String::new();
    match err.span {
        Some(span) => {
            let (line, col) = line_col(source, span.start);
            let _ = writeln!(out, "{path}:{line}:{col}: {err}");
        }
        None => {
            let _ = writeln!(out, "{path}: {err}");
        }
    }

    if let Some(backtrace) = &err.backtrace {
        let frames = backtrace.frames();
        out.push_str("call backtrace:\n");
        for (i, frame) in frames.iter().take(MAX_BACKTRACE_FRAMES).enumerate() {
            let (line, col) = line_col(source, frame.call_span.start);
            let _ = writeln!(out, "  {i}: {} called at {path}:{line}:{col}", frame.name);
        }
        if frames.len() > MAX_BACKTRACE_FRAMES {
            let _ = writeln!(
                out,
                "  ... {} more frames",
                frames.len() - MAX_BACKTRACE_FRAMES
            );
        }
    }
    out
}
