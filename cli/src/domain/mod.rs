//! Domain layer: invocation types, SDK failure values, validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! or `crate::output`. All functions are synchronous and take data in,
//! returning data out.

pub mod config;
pub mod error;

pub use config::{DEFAULT_PORT, InvocationConfig};
pub use error::{ConfigError, SdkError, SdkFailure};
