//! C ABI surface of the Provider.
//!
//! Every function here is `#[no_mangle]` and `extern "C"` so that foreign
//! callers can bind to it by its plain name. The arithmetic lives in
//! `arith`; these are thin wrappers.

pub mod numeric;
pub mod version;

pub use numeric::{double_input, third_input};
pub use version::numeric_bridge_abi_version;
