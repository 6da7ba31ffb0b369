//! C declarations from `vixDiskLib.h` (VDDK 5.0 layout).

use std::ffi::{c_char, c_int, c_long, c_void};

use crate::VixError;

/// `VIXDISKLIB_CRED_UID`
pub const CRED_UID: c_int = 1;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct UidPasswdCreds {
    pub user_name: *mut c_char,
    pub password: *mut c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub struct SessionIdCreds {
    pub cookie: *mut c_char,
    pub user_name: *mut c_char,
    pub key: *mut c_char,
}

/// `union VixDiskLibCreds`. Only `uid` is ever written; the other members
/// are declared so the union has the size the library expects.
#[repr(C)]
#[derive(Clone, Copy)]
#[allow(dead_code)]
pub union Creds {
    pub uid: UidPasswdCreds,
    pub session_id: SessionIdCreds,
    pub ticket_id: *mut c_void,
}

/// `VixDiskLibConnectParams`
#[repr(C)]
pub struct RawConnectParams {
    pub vmx_spec: *mut c_char,
    pub server_name: *mut c_char,
    pub thumb_print: *mut c_char,
    pub private_use: c_long,
    pub cred_type: c_int,
    pub creds: Creds,
    pub port: u32,
}

/// `VixDiskLibConnection`
pub type RawConnection = *mut c_void;

/// `VixDiskLibGenericLogFunc *`; always passed as null.
pub type LogFunc = *const c_void;

pub type InitFn = unsafe extern "C" fn(
    major: u32,
    minor: u32,
    log: LogFunc,
    warn: LogFunc,
    panic: LogFunc,
    lib_dir: *const c_char,
) -> VixError;
pub type ExitFn = unsafe extern "C" fn();
pub type AccessFn =
    unsafe extern "C" fn(params: *const RawConnectParams, identity: *const c_char) -> VixError;
pub type ConnectFn =
    unsafe extern "C" fn(params: *const RawConnectParams, connection: *mut RawConnection) -> VixError;
pub type DisconnectFn = unsafe extern "C" fn(connection: RawConnection) -> VixError;
pub type GetErrorTextFn = unsafe extern "C" fn(err: VixError, locale: *const c_char) -> *mut c_char;
pub type FreeErrorTextFn = unsafe extern "C" fn(msg: *mut c_char);
