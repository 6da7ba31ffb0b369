//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: shared library loading,
//! environment settings and log setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::output` are forbidden.

pub mod config;
pub mod logging;
pub mod vddk;
