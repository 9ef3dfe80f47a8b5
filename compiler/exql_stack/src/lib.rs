//! Stack growth for deeply nested expressions.
//!
//! The parser descends once per nesting level and the evaluator walks the
//! resulting tree the same way, so `((((...))))` with thousands of levels
//! would exhaust a thread's native stack. Recursive entry points run their
//! bodies through [`ensure_sufficient_stack`], which switches to a freshly
//! allocated segment when the current one is nearly full.
//!
//! On `wasm32` the guard is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
