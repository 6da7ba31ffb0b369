//! Application service: re-enable (or force-disable) VM methods.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All SDK calls are routed through the injected [`DiskLib`] port and all
//! output through [`StatusReporter`].

use vixdisk::{ConnectParams, VERSION_MAJOR, VERSION_MINOR};

use crate::application::ports::{ACCESS_IDENTITY, DiskLib, StatusReporter};
use crate::domain::{InvocationConfig, SdkError, SdkFailure};

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// At least one checked SDK call failed.
    Failure,
}

impl Outcome {
    /// Process exit code: 0 on success, 1 on failure.
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Session states, in the order a successful run visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Connected,
    AccessEnded,
    AccessSkipped,
    Disconnected,
    ShutDown,
}

/// Run the prepare/connect/end-access sequence for `config`.
///
/// The first failure of init, prepare-for-access or connect is reported and
/// stops the forward path. The closing status is printed either way: unless
/// `config.disable_methods` is set, `EndAccess` is issued when the library
/// initialized and the re-enabled message follows. Its result, like those of
/// disconnect and exit, is only logged. Whatever was acquired is released
/// last: connection first, then the library.
pub fn enable_methods<L: DiskLib>(
    config: &InvocationConfig,
    lib: &L,
    reporter: &impl StatusReporter,
) -> Outcome {
    let mut outcome = Outcome::Success;
    let mut fail = |err: SdkError| {
        tracing::debug!(code = err.failure.code, file = err.file, line = err.line, "sdk call failed");
        reporter.sdk_error(&err);
        outcome = Outcome::Failure;
    };

    tracing::debug!(phase = ?Phase::Uninitialized, host = %config.host, vm = %config.vm_spec);

    let library = LibraryGuard::init(lib).map_err(&mut fail).ok();
    let params = config.connect_params();
    let connection = library
        .as_ref()
        .and_then(|library| library.open(&params).map_err(&mut fail).ok());

    if config.disable_methods {
        tracing::debug!(phase = ?Phase::AccessSkipped);
        reporter.methods_left_disabled();
    } else {
        match &library {
            Some(library) => library.end_access(&params),
            None => tracing::debug!("library not initialized, EndAccess not issued"),
        }
        reporter.methods_enabled();
    }

    drop(connection);
    drop(library);
    outcome
}

#[track_caller]
fn check<T>(result: Result<T, SdkFailure>) -> Result<T, SdkError> {
    match result {
        Ok(value) => Ok(value),
        Err(failure) => Err(SdkError::at_caller(failure)),
    }
}

/// Initialized library; calls `exit` on drop.
struct LibraryGuard<'a, L: DiskLib> {
    lib: &'a L,
}

impl<'a, L: DiskLib> LibraryGuard<'a, L> {
    fn init(lib: &'a L) -> Result<Self, SdkError> {
        check(lib.init(VERSION_MAJOR, VERSION_MINOR))?;
        tracing::debug!(phase = ?Phase::Initialized);
        Ok(Self { lib })
    }

    fn open(&self, params: &ConnectParams) -> Result<ConnectionGuard<'a, L>, SdkError> {
        check(self.lib.prepare_for_access(params, ACCESS_IDENTITY))?;
        let handle = check(self.lib.connect(params))?;
        tracing::debug!(phase = ?Phase::Connected);
        Ok(ConnectionGuard {
            lib: self.lib,
            handle: Some(handle),
        })
    }

    fn end_access(&self, params: &ConnectParams) {
        match self.lib.end_access(params, ACCESS_IDENTITY) {
            Ok(()) => tracing::debug!(phase = ?Phase::AccessEnded),
            Err(failure) => tracing::warn!(%failure, "end access failed"),
        }
    }
}

impl<L: DiskLib> Drop for LibraryGuard<'_, L> {
    fn drop(&mut self) {
        self.lib.exit();
        tracing::debug!(phase = ?Phase::ShutDown);
    }
}

/// Open connection; disconnects on drop.
struct ConnectionGuard<'a, L: DiskLib> {
    lib: &'a L,
    handle: Option<L::Connection>,
}

impl<L: DiskLib> Drop for ConnectionGuard<'_, L> {
    fn drop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        match self.lib.disconnect(handle) {
            Ok(()) => tracing::debug!(phase = ?Phase::Disconnected),
            Err(failure) => tracing::warn!(%failure, "disconnect failed"),
        }
    }
}
