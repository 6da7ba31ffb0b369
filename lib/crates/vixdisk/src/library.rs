//! Run-time loaded VixDiskLib entry points.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString, OsString};
use std::path::{Path, PathBuf};
use std::ptr;

use libloading::Library;

use crate::ffi::{
    AccessFn, ConnectFn, DisconnectFn, ExitFn, FreeErrorTextFn, GetErrorTextFn, InitFn,
    RawConnection,
};
use crate::params::{CConnectParams, c_string};
use crate::{ConnectParams, Error, LIBRARY_NAME, VixError, failed};

/// Path of the VixDiskLib shared library: `libdir` joined with the platform
/// file name, or the bare file name for the system loader to resolve.
#[must_use]
pub fn library_path(libdir: Option<&Path>) -> PathBuf {
    let file_name: OsString = libloading::library_filename(LIBRARY_NAME);
    match libdir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Open connection returned by [`VixDiskLib::connect`]. Consumed by
/// [`VixDiskLib::disconnect`], so a handle can only be released once.
#[derive(Debug)]
pub struct Connection(RawConnection);

struct Api {
    init: InitFn,
    exit: ExitFn,
    prepare_for_access: AccessFn,
    end_access: AccessFn,
    connect: ConnectFn,
    disconnect: DisconnectFn,
    get_error_text: GetErrorTextFn,
    free_error_text: FreeErrorTextFn,
}

/// A loaded VixDiskLib. The function pointers stay valid while `_library`
/// is alive.
pub struct VixDiskLib {
    api: Api,
    _library: Library,
}

impl VixDiskLib {
    /// Load the shared library at `path` and resolve every entry point.
    ///
    /// # Errors
    ///
    /// Returns an error if the library cannot be opened or lacks a symbol.
    pub fn load(path: &Path) -> Result<Self, Error> {
        // SAFETY: opening VixDiskLib runs its static initializers, which have
        // no preconditions on the caller.
        let library = unsafe { Library::new(path) }.map_err(|source| Error::Load {
            path: path.to_path_buf(),
            source,
        })?;

        // SAFETY: each type below matches the prototype in vixDiskLib.h.
        let api = unsafe {
            Api {
                init: symbol(&library, "VixDiskLib_Init")?,
                exit: symbol(&library, "VixDiskLib_Exit")?,
                prepare_for_access: symbol(&library, "VixDiskLib_PrepareForAccess")?,
                end_access: symbol(&library, "VixDiskLib_EndAccess")?,
                connect: symbol(&library, "VixDiskLib_Connect")?,
                disconnect: symbol(&library, "VixDiskLib_Disconnect")?,
                get_error_text: symbol(&library, "VixDiskLib_GetErrorText")?,
                free_error_text: symbol(&library, "VixDiskLib_FreeErrorText")?,
            }
        };

        Ok(Self {
            api,
            _library: library,
        })
    }

    /// `VixDiskLib_Init` without log callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Vix`] when the library reports a failure.
    pub fn init(&self, major: u32, minor: u32, libdir: Option<&Path>) -> Result<(), Error> {
        let libdir = libdir
            .map(|dir| {
                let utf8 = dir.to_str().ok_or_else(|| Error::LibDir(dir.to_path_buf()))?;
                c_string(utf8, "library directory")
            })
            .transpose()?;
        let libdir_ptr = libdir.as_deref().map_or(ptr::null(), CStr::as_ptr);

        // SAFETY: null log callbacks select the library defaults; `libdir`
        // outlives the call.
        let err = unsafe {
            (self.api.init)(major, minor, ptr::null(), ptr::null(), ptr::null(), libdir_ptr)
        };
        check(err)
    }

    /// `VixDiskLib_Exit`
    pub fn exit(&self) {
        // SAFETY: takes no arguments; calling it after a failed init is a no-op.
        unsafe { (self.api.exit)() }
    }

    /// `VixDiskLib_PrepareForAccess`: disables VM methods on behalf of
    /// `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be passed to C or the library
    /// reports a failure.
    pub fn prepare_for_access(&self, params: &ConnectParams, identity: &str) -> Result<(), Error> {
        self.access(self.api.prepare_for_access, params, identity)
    }

    /// `VixDiskLib_EndAccess`: re-enables VM methods disabled by
    /// `identity`.
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be passed to C or the library
    /// reports a failure.
    pub fn end_access(&self, params: &ConnectParams, identity: &str) -> Result<(), Error> {
        self.access(self.api.end_access, params, identity)
    }

    fn access(&self, call: AccessFn, params: &ConnectParams, identity: &str) -> Result<(), Error> {
        let params = CConnectParams::new(params)?;
        let identity: CString = c_string(identity, "identity")?;
        // SAFETY: both pointers reference values that live until the call returns.
        let err = unsafe { call(params.as_ptr(), identity.as_ptr()) };
        check(err)
    }

    /// `VixDiskLib_Connect`
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter cannot be passed to C or the library
    /// reports a failure.
    pub fn connect(&self, params: &ConnectParams) -> Result<Connection, Error> {
        let params = CConnectParams::new(params)?;
        let mut raw: RawConnection = ptr::null_mut();
        // SAFETY: `params` outlives the call and `raw` is a valid out pointer.
        let err = unsafe { (self.api.connect)(params.as_ptr(), &raw mut raw) };
        check(err)?;
        Ok(Connection(raw))
    }

    /// `VixDiskLib_Disconnect`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Vix`] when the library reports a failure.
    pub fn disconnect(&self, connection: Connection) -> Result<(), Error> {
        // SAFETY: the handle came from a successful connect and is consumed here.
        let err = unsafe { (self.api.disconnect)(connection.0) };
        check(err)
    }

    /// Human-readable text for `err` in the default locale.
    #[must_use]
    pub fn error_text(&self, err: VixError) -> String {
        // SAFETY: a null locale selects the default one.
        let msg = unsafe { (self.api.get_error_text)(err, ptr::null()) };
        if msg.is_null() {
            return format!("unknown VixDiskLib error {err:#x}");
        }
        // SAFETY: non-null results are NUL-terminated strings owned by the
        // library until released with VixDiskLib_FreeErrorText.
        let text = unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned();
        // SAFETY: `msg` came from VixDiskLib_GetErrorText and is freed once.
        unsafe { (self.api.free_error_text)(msg) };
        text
    }
}

/// # Safety
///
/// `T` must be the function pointer type of the C symbol `name`.
unsafe fn symbol<T: Copy>(library: &Library, name: &'static str) -> Result<T, Error> {
    let sym = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| Error::Symbol { symbol: name, source })?;
    Ok(*sym)
}

fn check(err: VixError) -> Result<(), Error> {
    if failed(err) { Err(Error::Vix(err)) } else { Ok(()) }
}
