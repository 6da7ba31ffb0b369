//! Run-time loaded bindings for the VMware VixDiskLib connection API.
//!
//! Only the connection lifecycle is covered: library init/exit,
//! prepare/end access, connect/disconnect and error text lookup. The shared
//! library is opened with `libloading` so nothing links against the SDK at
//! build time.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod error;
mod ffi;
pub mod library;
pub mod params;

pub use error::Error;
pub use library::{Connection, VixDiskLib, library_path};
pub use params::ConnectParams;

/// Raw `VixError` value as returned by every VixDiskLib call.
pub type VixError = u64;

/// `VIX_OK`
pub const VIX_OK: VixError = 0;

/// `VIX_E_FAIL`, the generic failure code.
pub const VIX_E_FAIL: VixError = 1;

/// API version requested from `VixDiskLib_Init`.
pub const VERSION_MAJOR: u32 = 5;
pub const VERSION_MINOR: u32 = 0;

/// Base name of the VixDiskLib shared library, without platform decoration.
pub const LIBRARY_NAME: &str = "vixDiskLib";

/// Mirrors the `VIX_FAILED` macro.
#[must_use]
pub const fn failed(err: VixError) -> bool {
    err != VIX_OK
}
