//! Session configuration.
//!
//! Policy knobs that shape how a session runs scripts. Guards (`max_*`) stop
//! only the offending loop or include; the session itself keeps going.

/// Default limit on nested `open`/`import`.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

/// Default limit on iterations of a single `while`.
pub const DEFAULT_MAX_LOOP_ITERATIONS: u64 = 1_000_000;

/// Runtime policy for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Deepest allowed chain of nested script files.
    pub max_include_depth: usize,
    /// Iterations one `while` may run before it is stopped, or `None` for no
    /// limit (cancellation is then the only way out of a non-terminating loop).
    pub max_loop_iterations: Option<u64>,
    /// Emit `Executing: <line>` before each line of a script file.
    pub echo_lines: bool,
    /// Emit `Opening '<path>'...` / `Importing from '<path>'...`.
    pub announce_files: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            max_loop_iterations: Some(DEFAULT_MAX_LOOP_ITERATIONS),
            echo_lines: true,
            announce_files: true,
        }
    }
}

impl SessionConfig {
    /// Only the script's own output: no echo, no announcements.
    pub fn quiet() -> Self {
        SessionConfig {
            echo_lines: false,
            announce_files: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_loop_iterations(mut self, limit: Option<u64>) -> Self {
        self.max_loop_iterations = limit;
        self
    }

    #[must_use]
    pub fn with_echo_lines(mut self, echo: bool) -> Self {
        self.echo_lines = echo;
        self
    }

    #[must_use]
    pub fn with_announce_files(mut self, announce: bool) -> Self {
        self.announce_files = announce;
        self
    }

    /// Whether `iterations` completed bodies have used up the loop budget.
    #[inline]
    pub(crate) fn loop_budget_spent(&self, iterations: u64) -> bool {
        self.max_loop_iterations
            .is_some_and(|limit| iterations >= limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.max_include_depth, 64);
        assert_eq!(config.max_loop_iterations, Some(1_000_000));
        assert!(config.echo_lines);
        assert!(config.announce_files);
    }

    #[test]
    fn quiet_keeps_guards() {
        let config = SessionConfig::quiet();
        assert!(!config.echo_lines);
        assert!(!config.announce_files);
        assert_eq!(config.max_include_depth, DEFAULT_MAX_INCLUDE_DEPTH);
    }

    #[test]
    fn loop_budget() {
        let bounded = SessionConfig::default().with_max_loop_iterations(Some(3));
        assert!(!bounded.loop_budget_spent(2));
        assert!(bounded.loop_budget_spent(3));

        let unbounded = bounded.with_max_loop_iterations(None);
        assert!(!unbounded.loop_budget_spent(u64::MAX));
    }
}
