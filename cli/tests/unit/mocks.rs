//! Shared mock infrastructure for unit tests.
//!
//! Provides a recording [`DiskLib`] whose calls can be made to fail, and a
//! recording [`StatusReporter`].

#![allow(dead_code, clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashMap;

use methods_enabler::application::ports::{DiskLib, StatusReporter};
use methods_enabler::domain::{SdkError, SdkFailure};
use vixdisk::ConnectParams;

// ── Fake DiskLib ──────────────────────────────────────────────────────────────

/// One SDK entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Init,
    PrepareForAccess,
    Connect,
    EndAccess,
    Disconnect,
    Exit,
}

/// Handle returned by [`FakeDiskLib::connect`].
#[derive(Debug)]
pub struct FakeConnection(pub u32);

/// Records every call in order; calls listed in `failures` return their
/// canned failure.
#[derive(Default)]
pub struct FakeDiskLib {
    calls: RefCell<Vec<Call>>,
    identities: RefCell<Vec<String>>,
    params: RefCell<Vec<ConnectParams>>,
    failures: HashMap<Call, SdkFailure>,
}

impl FakeDiskLib {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `call` fail with `code` and `description`.
    pub fn failing(mut self, call: Call, code: u64, description: &str) -> Self {
        self.failures.insert(call, SdkFailure::new(code, description));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn identities(&self) -> Vec<String> {
        self.identities.borrow().clone()
    }

    pub fn params(&self) -> Vec<ConnectParams> {
        self.params.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), SdkFailure> {
        self.calls.borrow_mut().push(call);
        match self.failures.get(&call) {
            Some(failure) => Err(failure.clone()),
            None => Ok(()),
        }
    }

    fn record_access(&self, call: Call, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure> {
        self.identities.borrow_mut().push(identity.to_string());
        self.params.borrow_mut().push(params.clone());
        self.record(call)
    }
}

impl DiskLib for FakeDiskLib {
    type Connection = FakeConnection;

    fn init(&self, _major: u32, _minor: u32) -> Result<(), SdkFailure> {
        self.record(Call::Init)
    }

    fn exit(&self) {
        self.calls.borrow_mut().push(Call::Exit);
    }

    fn prepare_for_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure> {
        self.record_access(Call::PrepareForAccess, params, identity)
    }

    fn end_access(&self, params: &ConnectParams, identity: &str) -> Result<(), SdkFailure> {
        self.record_access(Call::EndAccess, params, identity)
    }

    fn connect(&self, params: &ConnectParams) -> Result<FakeConnection, SdkFailure> {
        self.params.borrow_mut().push(params.clone());
        self.record(Call::Connect)?;
        Ok(FakeConnection(7))
    }

    fn disconnect(&self, _connection: FakeConnection) -> Result<(), SdkFailure> {
        self.record(Call::Disconnect)
    }
}

// ── Recording reporter ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SdkError(SdkError),
    MethodsEnabled,
    MethodsLeftDisabled,
}

#[derive(Default)]
pub struct RecordingReporter {
    events: RefCell<Vec<Event>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<SdkError> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::SdkError(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }
}

impl StatusReporter for RecordingReporter {
    fn sdk_error(&self, err: &SdkError) {
        self.events.borrow_mut().push(Event::SdkError(err.clone()));
    }

    fn methods_enabled(&self) {
        self.events.borrow_mut().push(Event::MethodsEnabled);
    }

    fn methods_left_disabled(&self) {
        self.events.borrow_mut().push(Event::MethodsLeftDisabled);
    }
}

// ── Config helpers ────────────────────────────────────────────────────────────

pub fn config(disable_methods: bool) -> methods_enabler::domain::InvocationConfig {
    methods_enabler::domain::InvocationConfig::new(
        "10.69.69.69".into(),
        "adminvcenter".into(),
        "esxi4ever".into(),
        "moid=vm-69".into(),
        disable_methods,
    )
    .expect("valid config")
}

/// A valid argument vector, program name first.
pub fn valid_args() -> Vec<String> {
    [
        "lazy-methods-enabler",
        "-host",
        "10.69.69.69",
        "-user",
        "adminvcenter",
        "-password",
        "esxi4ever",
        "-vm",
        "moid=vm-69",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}
