//! Stack growth for recursive descent and tree walks.
//!
//! Source files can nest brackets and expressions arbitrarily deep, and both
//! the parser and the visitor recurse once per nesting level. Recursive entry
//! points wrap their bodies in [`with_stack_room`] so pathological input grows
//! the stack onto the heap instead of aborting the process.

/// Remaining stack below which a new segment is allocated.
const MIN_REMAINING: usize = 64 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`MIN_REMAINING`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_room<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

/// On wasm the runtime owns the stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_room<R>(f: impl FnOnce() -> R) -> R {
    f()
}
