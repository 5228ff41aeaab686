//! Cooperative cancellation.
//!
//! The host keeps a clone of the session's token and sets it from another
//! thread (a signal handler, an editor's stop button). The session observes it
//! between loop iterations and between script lines, never mid-command.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Stays set until [`reset`](Self::reset).
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Clear a previous request so the session can run again.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;

    #[test]
    fn clones_share_the_flag() {
        let token = CancelToken::new();
        let remote = token.clone();
        assert!(!token.is_cancelled());
        remote.cancel();
        assert!(token.is_cancelled());
        token.reset();
        assert!(!remote.is_cancelled());
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .unwrap_or_else(|_| panic!("cancel thread panicked"));
        assert!(token.is_cancelled());
    }
}
