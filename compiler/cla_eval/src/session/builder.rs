//! `SessionBuilder` for creating sessions with non-default handlers or policy.

use cla_ir::Value;

use super::Session;
use crate::cancel::CancelToken;
use crate::config::SessionConfig;
use crate::environment::VariableStore;
use crate::input_handler::{stdin_input, SharedInputHandler};
use crate::loader::InclusionChain;
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for [`Session`].
///
/// Unset handlers default to the console: stdout for output, stdin for `i`.
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    print_handler: Option<SharedPrintHandler>,
    input_handler: Option<SharedInputHandler>,
    cancel: Option<CancelToken>,
    variables: VariableStore,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Where emitted lines and `i` prompts go.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Where `i` reads from.
    #[must_use]
    pub fn input_handler(mut self, handler: SharedInputHandler) -> Self {
        self.input_handler = Some(handler);
        self
    }

    /// Share an existing token instead of creating a fresh one.
    #[must_use]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Pre-declare variables.
    #[must_use]
    pub fn variables<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        for (name, value) in vars {
            self.variables.define(name, value);
        }
        self
    }

    pub fn build(self) -> Session {
        Session {
            store: self.variables,
            config: self.config,
            print: self.print_handler.unwrap_or_else(stdout_handler),
            input: self.input_handler.unwrap_or_else(stdin_input),
            cancel: self.cancel.unwrap_or_default(),
            chain: InclusionChain::new(),
        }
    }
}
