//! Unit tests for lazy-methods-enabler
//!
//! These tests drive the orchestrator and parser with a recording fake
//! `DiskLib` and run fast without loading VixDiskLib.

mod mocks;
mod property_tests;
