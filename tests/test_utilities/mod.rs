//! Shared helpers for integration tests
//!
//! Each test binary uses only part of this module.
#![allow(dead_code)]

pub mod mocks;
pub mod stub_server;
