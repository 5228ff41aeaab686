//! Stack safety for nested script inclusion.
//!
//! Each `open`/`import` re-enters the per-line evaluator, so a deep include
//! chain is deep native recursion. `stacker` grows the stack on demand; on
//! WASM the closure runs directly.

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_INCLUDE: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_INCLUDE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
