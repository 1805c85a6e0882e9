//! Contract version query for run-time loaders.

use crate::contract::ABI_VERSION;

/// Version of the exported signature table.
///
/// Loaders compare this against the version they were built for before
/// resolving any other symbol.
#[no_mangle]
pub extern "C" fn numeric_bridge_abi_version() -> u32 {
    ABI_VERSION
}
