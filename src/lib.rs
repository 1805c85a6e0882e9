//! Numeric Bridge - integer functions behind a C ABI
//!
//! The library exports `double_input` and `third_input` (plus a contract
//! version query) as unmangled `extern "C"` symbols, links a C
//! implementation of the same two functions, and ships the Rust side of a
//! Caller that obtains them either at link time or from a shared library at
//! run time.

pub mod arith;
pub mod caller;
pub mod config;
pub mod contract;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod provider;

pub use caller::{invoke, render, Invocation, Mode};
pub use error::{BridgeError, BridgeResult};
pub use ffi::{double_input, numeric_bridge_abi_version, third_input};
pub use provider::{CProvider, DynamicProvider, LinkedProvider, Provider};
