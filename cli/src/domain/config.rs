//! Invocation configuration assembled from the command line.
//!
//! Pure functions only: no I/O, no environment access.

use std::fmt;

use vixdisk::ConnectParams;

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// VixDiskLib NFC port on ESXi hosts and vCenter.
pub const DEFAULT_PORT: u32 = 902;

// ── Config schema ────────────────────────────────────────────────────────────

/// Everything one run needs. Built once and borrowed by the orchestrator.
#[derive(Clone, PartialEq, Eq)]
pub struct InvocationConfig {
    /// ESXi or vCenter address.
    pub host: String,
    pub user_name: String,
    pub password: String,
    /// VM identifier in `moid=<moref>` form.
    pub vm_spec: String,
    /// Skip `EndAccess` and leave the methods disabled.
    pub disable_methods: bool,
    pub port: u32,
}

impl InvocationConfig {
    /// Build a config on the default port.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyValue`] naming the first empty field.
    pub fn new(
        host: String,
        user_name: String,
        password: String,
        vm_spec: String,
        disable_methods: bool,
    ) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("host", &host),
            ("user", &user_name),
            ("password", &password),
            ("vm", &vm_spec),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyValue(field));
            }
        }

        Ok(Self {
            host,
            user_name,
            password,
            vm_spec,
            disable_methods,
            port: DEFAULT_PORT,
        })
    }

    /// Connection parameters with user/password credentials.
    #[must_use]
    pub fn connect_params(&self) -> ConnectParams {
        ConnectParams {
            vmx_spec: self.vm_spec.clone(),
            server_name: self.host.clone(),
            user_name: self.user_name.clone(),
            password: self.password.clone(),
            port: self.port,
        }
    }
}

impl fmt::Debug for InvocationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationConfig")
            .field("host", &self.host)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .field("vm_spec", &self.vm_spec)
            .field("disable_methods", &self.disable_methods)
            .field("port", &self.port)
            .finish()
    }
}
