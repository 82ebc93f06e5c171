//! The `run` command: execute a Pile program.

use pile_eval::{
    stdout_handler, EvalMode, Interpreter, InterpreterBuilder, RunStatus, Scoping,
    SharedPrintHandler,
};

use super::read_source;
use crate::reporting::render_error;

/// Environment variable overriding the default nesting limit.
pub const MAX_DEPTH_ENV: &str = "PILE_MAX_DEPTH";

/// Interpreter settings chosen on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub scoping: Scoping,
    pub max_depth: Option<usize>,
}

impl RunOptions {
    /// Defaults, with `PILE_MAX_DEPTH` applied when it is set.
    pub fn from_env() -> Result<Self, String> {
        let mut options = RunOptions::default();
        if let Ok(value) = std::env::var(MAX_DEPTH_ENV) {
            options.max_depth = Some(parse_depth(&value, MAX_DEPTH_ENV)?);
        }
        Ok(options)
    }

    fn interpreter(&self, print_handler: SharedPrintHandler) -> Interpreter {
        let mut builder = InterpreterBuilder::new()
            .mode(EvalMode::Interpret)
            .scoping(self.scoping)
            .print_handler(print_handler);
        if let Some(depth) = self.max_depth {
            builder = builder.max_depth(depth);
        }
        builder.build()
    }
}

/// Parsed arguments of `pile run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunArgs {
    pub path: String,
    pub options: RunOptions,
}

/// Parse the arguments that follow `run`, on top of `base` options.
pub fn parse_run_args(args: &[String], base: RunOptions) -> Result<RunArgs, String> {
    let mut options = base;
    let mut path = None;
    for arg in args {
        if arg == "--flat-scope" {
            options.scoping = Scoping::Flat;
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            options.max_depth = Some(parse_depth(value, "--max-depth")?);
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }
    let path = path.ok_or_else(|| "missing file path".to_string())?;
    Ok(RunArgs { path, options })
}

fn parse_depth(value: &str, origin: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(format!(
            "{origin}: expected a positive integer, got '{value}'"
        )),
    }
}

/// Run `source` and report a failure on `stderr`.
///
/// `path` is only used to label error positions.
pub fn run_source(
    path: &str,
    source: &str,
    options: &RunOptions,
    print_handler: SharedPrintHandler,
    stderr: &mut impl std::io::Write,
) -> RunStatus {
    let mut interp = options.interpreter(print_handler);
    let result = interp.execute(source);
    if let Err(err) = &result {
        let _ = stderr.write_all(render_error(path, source, err).as_bytes());
    }
    let status = RunStatus::from_result(&result);
    tracing::debug!(?status, path, "program finished");
    status
}

/// Run a file with stdout output. Returns the process exit code.
pub fn run_file(args: &RunArgs) -> i32 {
    let source = match read_source(&args.path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {msg}");
            return 1;
        }
    };
    let status = run_source(
        &args.path,
        &source,
        &args.options,
        stdout_handler(),
        &mut std::io::stderr(),
    );
    status.code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pile_eval::buffer_handler;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_path_and_flags() {
        let parsed = parse_run_args(
            &args(&["--flat-scope", "prog.pile", "--max-depth=64"]),
            RunOptions::default(),
        );
        assert_eq!(
            parsed,
            Ok(RunArgs {
                path: "prog.pile".to_string(),
                options: RunOptions {
                    scoping: Scoping::Flat,
                    max_depth: Some(64),
                },
            })
        );
    }

    #[test]
    fn flags_override_base_options() {
        let base = RunOptions {
            scoping: Scoping::CallFrames,
            max_depth: Some(10),
        };
        let parsed = parse_run_args(&args(&["a.pile", "--max-depth=20"]), base);
        assert_eq!(parsed.map(|a| a.options.max_depth), Ok(Some(20)));
    }

    #[test]
    fn rejects_bad_arguments() {
        let base = RunOptions::default;
        assert!(parse_run_args(&args(&[]), base()).is_err());
        assert!(parse_run_args(&args(&["a", "b"]), base()).is_err());
        assert!(parse_run_args(&args(&["a", "--verbose"]), base()).is_err());
        assert!(parse_run_args(&args(&["a", "--max-depth=0"]), base()).is_err());
        assert!(parse_run_args(&args(&["a", "--max-depth=lots"]), base()).is_err());
    }

    #[test]
    fn run_source_reports_status_and_output() {
        let handler = buffer_handler();
        let mut stderr = Vec::new();
        let status = run_source(
            "t.pile",
            "1 2 + print",
            &RunOptions::default(),
            handler.clone(),
            &mut stderr,
        );
        assert_eq!(status, RunStatus::Completed);
        assert_eq!(handler.get_output(), "3");
        assert!(stderr.is_empty());
    }

    #[test]
    fn run_source_renders_errors() {
        let mut stderr = Vec::new();
        let status = run_source(
            "t.pile",
            "1 0 /",
            &RunOptions::default(),
            buffer_handler(),
            &mut stderr,
        );
        assert_eq!(status, RunStatus::Failed);
        assert_eq!(
            String::from_utf8_lossy(&stderr),
            "t.pile:1:5: arithmetic error: division by zero in `/`\n"
        );
    }

    #[test]
    fn max_depth_option_is_applied() {
        let options = RunOptions {
            scoping: Scoping::CallFrames,
            max_depth: Some(1),
        };
        let mut stderr = Vec::new();
        let status = run_source(
            "t.pile",
            "1 if { 1 if { } }",
            &options,
            buffer_handler(),
            &mut stderr,
        );
        assert_eq!(status, RunStatus::Failed);
    }
}
