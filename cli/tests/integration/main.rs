//! Integration tests for lazy-methods-enabler
//!
//! These tests spawn the actual binary and test end-to-end behavior. None
//! of them needs VixDiskLib installed.
