//! Typed domain error values.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use std::panic::Location;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("-{0} must not be empty")]
    EmptyValue(&'static str),
}

// ── SDK errors ────────────────────────────────────────────────────────────────

/// A failed VixDiskLib call: the raw code and its text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:x} {description}")]
pub struct SdkFailure {
    pub code: u64,
    pub description: String,
}

impl SdkFailure {
    #[must_use]
    pub fn new(code: u64, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
        }
    }
}

/// An [`SdkFailure`] tagged with the source location that checked it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{file}:{line}]  {failure}")]
pub struct SdkError {
    pub failure: SdkFailure,
    pub file: &'static str,
    pub line: u32,
}

impl SdkError {
    /// Tag `failure` with the caller's location.
    #[must_use]
    #[track_caller]
    pub fn at_caller(failure: SdkFailure) -> Self {
        let location = Location::caller();
        Self {
            failure,
            file: location.file(),
            line: location.line(),
        }
    }
}
