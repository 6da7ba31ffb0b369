//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and the shared `vixdisk`
//! value types.

use vixdisk::ConnectParams;

use crate::domain::{SdkError, SdkFailure};

// ── Constants ─────────────────────────────────────────────────────────────────

/// Identity passed to `PrepareForAccess`/`EndAccess`. The server tracks
/// disabled methods per identity, so both calls must use the same value.
pub const ACCESS_IDENTITY: &str = "lazyMethodsEnabler";

// ── SDK Port ──────────────────────────────────────────────────────────────────

/// The VixDiskLib calls the orchestrator sequences.
///
/// Every fallible call returns the raw code and its text; the caller adds
/// the location.
pub trait DiskLib {
    /// Open connection. Consumed by [`DiskLib::disconnect`].
    type Connection;

    /// Process-wide library initialization.
    fn init(&self, major: u32, minor: u32) -> Result<(), SdkFailure>;
    /// Library shutdown. Only valid after a successful `init`.
    fn exit(&self);
    /// Mark VM methods as disabled for `identity`.
    fn prepare_for_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure>;
    /// Clear the disabled-methods state held by `identity`.
    fn end_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure>;
    fn connect(&self, params: &ConnectParams) -> Result<Self::Connection, SdkFailure>;
    fn disconnect(&self, connection: Self::Connection) -> Result<(), SdkFailure>;
}

// ── Presentation Port ─────────────────────────────────────────────────────────

/// Status lines emitted by the orchestrator.
pub trait StatusReporter {
    /// A checked SDK call failed.
    fn sdk_error(&self, err: &SdkError);
    /// `EndAccess` succeeded.
    fn methods_enabled(&self);
    /// `EndAccess` was skipped on request.
    fn methods_left_disabled(&self);
}
