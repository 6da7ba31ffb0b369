//! `TerminalReporter`: Presentation-layer implementation of `StatusReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::StatusReporter`
//! trait so the orchestrator can emit status lines without depending on any
//! presentation type directly. Every line goes to stdout.

use crate::application::ports::StatusReporter;
use crate::domain::SdkError;
use crate::output::{METHODS_ENABLED, OutputContext};

/// Terminal status reporter that wraps an `OutputContext`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl StatusReporter for TerminalReporter<'_> {
    fn sdk_error(&self, err: &SdkError) {
        println!("{}", OutputContext::sdk_error_line(err));
    }

    fn methods_enabled(&self) {
        println!("{METHODS_ENABLED}");
    }

    fn methods_left_disabled(&self) {
        println!("{}", self.ctx.methods_left_disabled_line());
    }
}
