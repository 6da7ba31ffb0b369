//! VixDiskLib-backed implementation of the `DiskLib` port.

use std::cell::OnceCell;

use vixdisk::{ConnectParams, Connection, VIX_E_FAIL, VixDiskLib};

use crate::application::ports::DiskLib;
use crate::domain::SdkFailure;
use crate::infra::config::Settings;

/// Loads VixDiskLib on `init` and forwards every call to it.
pub struct VddkDiskLib {
    settings: Settings,
    library: OnceCell<VixDiskLib>,
}

impl VddkDiskLib {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            library: OnceCell::new(),
        }
    }

    fn loaded(&self) -> Result<&VixDiskLib, SdkFailure> {
        self.library
            .get()
            .ok_or_else(|| SdkFailure::new(VIX_E_FAIL, "VixDiskLib is not initialized"))
    }
}

/// Attach the library's own text to `err` when it came from a library call.
fn describe(library: &VixDiskLib, err: &vixdisk::Error) -> SdkFailure {
    match err {
        vixdisk::Error::Vix(code) => SdkFailure::new(*code, library.error_text(*code)),
        other => SdkFailure::new(other.code(), other.to_string()),
    }
}

impl DiskLib for VddkDiskLib {
    type Connection = Connection;

    fn init(&self, major: u32, minor: u32) -> Result<(), SdkFailure> {
        if self.library.get().is_some() {
            return Err(SdkFailure::new(VIX_E_FAIL, "VixDiskLib is already initialized"));
        }

        let path = self.settings.library_path();
        tracing::debug!(path = %path.display(), "loading VixDiskLib");
        let library =
            VixDiskLib::load(&path).map_err(|e| SdkFailure::new(e.code(), e.to_string()))?;

        tracing::debug!(major, minor, libdir = ?self.settings.libdir, "VixDiskLib_Init");
        library
            .init(major, minor, self.settings.libdir.as_deref())
            .map_err(|e| describe(&library, &e))?;

        self.library
            .set(library)
            .map_err(|_| SdkFailure::new(VIX_E_FAIL, "VixDiskLib is already initialized"))
    }

    fn exit(&self) {
        if let Some(library) = self.library.get() {
            tracing::debug!("VixDiskLib_Exit");
            library.exit();
        }
    }

    fn prepare_for_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure> {
        let library = self.loaded()?;
        tracing::debug!(identity, vm = %params.vmx_spec, "VixDiskLib_PrepareForAccess");
        library
            .prepare_for_access(params, identity)
            .map_err(|e| describe(library, &e))
    }

    fn end_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure> {
        let library = self.loaded()?;
        tracing::debug!(identity, vm = %params.vmx_spec, "VixDiskLib_EndAccess");
        library
            .end_access(params, identity)
            .map_err(|e| describe(library, &e))
    }

    fn connect(&self, params: &ConnectParams) -> Result<Connection, SdkFailure> {
        let library = self.loaded()?;
        tracing::debug!(server = %params.server_name, port = params.port, "VixDiskLib_Connect");
        library.connect(params).map_err(|e| describe(library, &e))
    }

    fn disconnect(&self, connection: Connection) -> Result<(), SdkFailure> {
        let library = self.loaded()?;
        tracing::debug!("VixDiskLib_Disconnect");
        library.disconnect(connection).map_err(|e| describe(library, &e))
    }
}
