//! Top-level run: parse, orchestrate, map to an exit code.
//!
//! The SDK and the output context are injected so the whole flow can run
//! against a fake `DiskLib`.

use std::ffi::OsString;

use crate::application::ports::DiskLib;
use crate::application::services::methods_enabler::{Outcome, enable_methods};
use crate::cli;
use crate::output::{OutputContext, TerminalReporter};

/// Exit code for a rejected command line.
pub const USAGE_EXIT_CODE: u8 = 1;

/// Parse `args` and run the session against `lib`.
///
/// Returns the process exit code: 0 on success, 1 on a usage error or any
/// failed SDK call.
pub fn run<I, T, L>(args: I, lib: &L, ctx: &OutputContext) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    L: DiskLib,
{
    let config = match cli::parse(args) {
        Ok(config) => config,
        Err(err) => {
            tracing::debug!(%err, "rejected command line");
            ctx.usage();
            return USAGE_EXIT_CODE;
        }
    };
    tracing::debug!(?config, "parsed command line");

    let reporter = TerminalReporter::new(ctx);
    let outcome = enable_methods(&config, lib, &reporter);
    if outcome == Outcome::Failure {
        tracing::debug!("finished with errors");
    }
    outcome.exit_code()
}
