//! Evaluation modes.
//!
//! `EvalMode` selects the interpreter's policy for a run: how deep blocks
//! may nest, whether executed tokens are counted against a budget, and where
//! `print` output goes by default.

use crate::print_handler::{buffer_handler, stdout_handler, SharedPrintHandler};

/// Evaluation policy for one interpreter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Standard mode for `pile run`: output goes to stdout.
    #[default]
    Interpret,
    /// Test execution: output is captured, nesting kept shallow.
    TestRun,
    /// Untrusted input: at most `budget` tokens are executed.
    Bounded {
        /// Maximum number of executed tokens before aborting.
        budget: u64,
    },
}

impl EvalMode {
    /// Maximum nesting of blocks and calls.
    ///
    /// - `Interpret`: 10 000 (stacker grows the native stack on demand)
    /// - `TestRun`: 500
    /// - `Bounded`: 256
    #[inline]
    pub fn max_depth(&self) -> usize {
        match self {
            Self::Interpret => 10_000,
            Self::TestRun => 500,
            Self::Bounded { .. } => 256,
        }
    }

    #[inline]
    pub fn step_budget(&self) -> Option<u64> {
        match self {
            Self::Bounded { budget } => Some(*budget),
            Self::Interpret | Self::TestRun => None,
        }
    }

    /// Print handler used when the builder is not given one.
    pub fn default_print_handler(&self) -> SharedPrintHandler {
        match self {
            Self::Interpret => stdout_handler(),
            Self::TestRun | Self::Bounded { .. } => buffer_handler(),
        }
    }
}

/// Per-run mutable state that belongs to the mode.
#[derive(Debug)]
pub struct ModeState {
    /// Tokens executed so far.
    pub steps: u64,
    budget: Option<u64>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        ModeState {
            steps: 0,
            budget: mode.step_budget(),
        }
    }

    /// Count one executed token.
    ///
    /// Returns the exhausted budget once the count goes past it.
    #[inline]
    pub fn check_step(&mut self) -> Result<(), u64> {
        self.steps = self.steps.saturating_add(1);
        match self.budget {
            Some(budget) if self.steps > budget => Err(budget),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
