//! Stack growth for deeply nested expressions.
//!
//! The parser, reader and evaluator all recurse once per nesting level and
//! the language imposes no depth limit, so `((((...))))` of arbitrary depth
//! must not blow the native stack. Each recursive step runs inside
//! [`ensure_sufficient_stack`], which switches to a freshly allocated segment
//! when the current one is nearly exhausted.
//!
//! On `wasm32` the closure is called directly.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first moving to a new stack segment if the current one is
/// within [`RED_ZONE`] of its end.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
