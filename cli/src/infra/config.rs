//! Environment settings for locating VixDiskLib.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "VDDK_";

/// Settings read from `VDDK_*` environment variables.
///
///   - `VDDK_LIBDIR`:  VDDK installation `lib`/`bin` directory; also passed
///     to `VixDiskLib_Init`
///   - `VDDK_LIBRARY`: full path of the shared library, overriding the
///     `VDDK_LIBDIR` lookup
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub libdir: Option<PathBuf>,
    pub library: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a `VDDK_*` variable cannot be deserialized.
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .context("invalid VDDK_* environment")
    }

    /// Load settings from explicit key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a `VDDK_*` variable cannot be deserialized.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("invalid VDDK_* environment")
    }

    /// Shared library to load.
    #[must_use]
    pub fn library_path(&self) -> PathBuf {
        self.library
            .clone()
            .unwrap_or_else(|| vixdisk::library_path(self.libdir.as_deref()))
    }
}
