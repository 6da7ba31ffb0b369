//! Application services: use-case orchestration.
//!
//! Each service accepts port trait bounds so callers can inject real or mock
//! implementations.

pub mod methods_enabler;
