//! Stack growth for recursive tree walks.
//!
//! Trees built from long left-associative chains (`1+1+1+...`) are as deep
//! as the chain is long, so every recursive walk over a tree (rendering,
//! substitution, evaluation) goes through [`ensure_sufficient_stack`].

/// Remaining stack below which we grow (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack; call through directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
