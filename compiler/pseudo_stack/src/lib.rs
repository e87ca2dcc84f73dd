//! Stack growth for deep recursion in the pseudo-code engine.
//!
//! Expression parsing and tree-walking evaluation both recurse once per
//! nesting level, and user functions recurse once per call. A learner's
//! `((((...))))` or a runaway recursive function must end in a diagnostic,
//! not a native stack overflow that takes the host process down.
//!
//! Wrap each recursive entry point in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_expr_inner(expr))
//! }
//! ```
//!
//! On native targets the stack is grown on demand with `stacker`; on WASM the
//! closure is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
