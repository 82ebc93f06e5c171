//! Stack safety utilities for the recursive Pile evaluator.
//!
//! Every `loop`, `if`, and function call re-enters the evaluator on a fresh
//! cursor, so the host call stack mirrors the nesting of the program. Two
//! tools keep that safe:
//!
//! - [`ensure_sufficient_stack`] grows the native stack on demand (`stacker`)
//!   so a legal nesting depth never overflows the host thread.
//! - [`DepthGuard`] enforces an explicit nesting limit, turning runaway
//!   recursion (`func f { f } f`) into an ordinary error.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` with a 100KB red zone.
//! - **WASM targets**: no-op passthrough (WASM has its own stack management).


/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If less than the red zone remains, a new 1MB segment is allocated
/// before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Returned by [`DepthGuard::enter`] when the nesting limit is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthExceeded {
    /// The configured limit that was hit.
    pub limit: usize,
}

/// Counts how deeply the evaluator is nested and rejects entries past a limit.
///
/// `enter` and `leave` must be paired; the evaluator calls `leave` on every
/// exit path of a nested block, including errors.
#[derive(Clone, Debug, Default)]
pub struct DepthGuard {
    depth: usize,
    limit: Option<usize>,
}

impl DepthGuard {
    /// Create a guard. `None` means unlimited (rely on stack growth alone).
    pub fn new(limit: Option<usize>) -> Self {
        Self { depth: 0, limit }
    }

    /// Record one more level of nesting.
    ///
    /// The depth is not incremented when the limit is exceeded, so a failed
    /// `enter` must not be followed by `leave`.
    pub fn enter(&mut self) -> Result<(), DepthExceeded> {
        if let Some(limit) = self.limit {
            if self.depth >= limit {
                return Err(DepthExceeded { limit });
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave one level of nesting.
    pub fn leave(&mut self) {
        debug_assert!(self.depth > 0, "DepthGuard::leave() without enter()");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current nesting depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Configured limit, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}
