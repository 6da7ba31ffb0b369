//! Errors raised while loading or calling VixDiskLib.

use std::path::PathBuf;

use thiserror::Error;

use crate::VixError;

#[derive(Debug, Error)]
pub enum Error {
    /// The library call returned a non-`VIX_OK` code.
    #[error("VixDiskLib call failed with error {0:#x}")]
    Vix(VixError),

    #[error("cannot load VixDiskLib from {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("VixDiskLib does not export {symbol}: {source}")]
    Symbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("{field} contains an interior NUL byte")]
    InteriorNul { field: &'static str },

    #[error("library directory is not valid UTF-8: {}", .0.display())]
    LibDir(PathBuf),
}

impl Error {
    /// The `VixError` to report for this failure. Errors that never reached
    /// the library are reported as `VIX_E_FAIL`.
    #[must_use]
    pub fn code(&self) -> VixError {
        match self {
            Self::Vix(code) => *code,
            _ => crate::VIX_E_FAIL,
        }
    }
}
