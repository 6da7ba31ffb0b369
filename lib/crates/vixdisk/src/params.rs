//! Owned connection parameters and their C representation.

use std::ffi::{CString, c_char};
use std::fmt;
use std::ptr;

use crate::Error;
use crate::ffi::{CRED_UID, Creds, RawConnectParams, UidPasswdCreds};

/// Connection parameters for a user/password session against an ESXi host
/// or vCenter server.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectParams {
    /// VM identifier, e.g. `moid=vm-69`.
    pub vmx_spec: String,
    pub server_name: String,
    pub user_name: String,
    pub password: String,
    pub port: u32,
}

impl fmt::Debug for ConnectParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectParams")
            .field("vmx_spec", &self.vmx_spec)
            .field("server_name", &self.server_name)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .finish()
    }
}

/// `VixDiskLibConnectParams` together with the C strings it points into.
///
/// The raw struct must not outlive `self`.
pub(crate) struct CConnectParams {
    raw: RawConnectParams,
    _strings: [CString; 4],
}

impl CConnectParams {
    pub(crate) fn new(params: &ConnectParams) -> Result<Self, Error> {
        let vmx_spec = c_string(&params.vmx_spec, "vm identifier")?;
        let server_name = c_string(&params.server_name, "host")?;
        let user_name = c_string(&params.user_name, "user name")?;
        let password = c_string(&params.password, "password")?;

        let raw = RawConnectParams {
            vmx_spec: as_mut_ptr(&vmx_spec),
            server_name: as_mut_ptr(&server_name),
            thumb_print: ptr::null_mut(),
            private_use: 0,
            cred_type: CRED_UID,
            creds: Creds {
                uid: UidPasswdCreds {
                    user_name: as_mut_ptr(&user_name),
                    password: as_mut_ptr(&password),
                },
            },
            port: params.port,
        };

        Ok(Self {
            raw,
            _strings: [vmx_spec, server_name, user_name, password],
        })
    }

    pub(crate) fn as_ptr(&self) -> *const RawConnectParams {
        &raw const self.raw
    }
}

pub(crate) fn c_string(value: &str, field: &'static str) -> Result<CString, Error> {
    CString::new(value).map_err(|_| Error::InteriorNul { field })
}

// The header declares these fields `char *` but the library never writes
// through them.
fn as_mut_ptr(s: &CString) -> *mut c_char {
    s.as_ptr().cast_mut()
}
