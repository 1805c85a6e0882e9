//! Ways for the Caller to obtain the exported functions.
//!
//! `LinkedProvider` binds at link time through an `extern "C"` block, so a
//! missing symbol keeps the program from being built or started at all.
//! `CProvider` binds the same way to the C implementation in `csrc/`.
//! `DynamicProvider` resolves the contract symbols by name from a shared
//! library at run time.

use std::path::{Path, PathBuf};

use libloading::Library;
use log::{debug, info};

use crate::contract;
use crate::error::{BridgeError, BridgeResult};

/// The two Provider functions, however they were obtained.
pub trait Provider: Sync {
    fn double_input(&self, input: i32) -> i32;
    fn third_input(&self, input: i32) -> i32;

    /// Short description for log output.
    fn describe(&self) -> String;
}

mod linked {
    extern "C" {
        pub fn double_input(input: i32) -> i32;
        pub fn third_input(input: i32) -> i32;
    }
}

/// Provider resolved by the linker.
#[derive(Copy, Clone, Debug, Default)]
pub struct LinkedProvider;

impl Provider for LinkedProvider {
    fn double_input(&self, input: i32) -> i32 {
        // Safety: the declaration matches the exported definition, and the
        // function is total over i32.
        unsafe { linked::double_input(input) }
    }

    fn third_input(&self, input: i32) -> i32 {
        // Safety: as above.
        unsafe { linked::third_input(input) }
    }

    fn describe(&self) -> String {
        "linked".to_owned()
    }
}

mod c_numeric {
    extern "C" {
        pub fn c_double_input(input: i32) -> i32;
        pub fn c_third_input(input: i32) -> i32;
    }
}

/// Provider implemented in C (`csrc/numeric.c`), built by `build.rs` and
/// linked statically.
#[derive(Copy, Clone, Debug, Default)]
pub struct CProvider;

impl Provider for CProvider {
    fn double_input(&self, input: i32) -> i32 {
        // Safety: `int32_t c_double_input(int32_t)` in csrc/numeric.c, total
        // over int32_t.
        unsafe { c_numeric::c_double_input(input) }
    }

    fn third_input(&self, input: i32) -> i32 {
        // Safety: as above.
        unsafe { c_numeric::c_third_input(input) }
    }

    fn describe(&self) -> String {
        "c".to_owned()
    }
}

type NumericFn = unsafe extern "C" fn(i32) -> i32;
type VersionFn = unsafe extern "C" fn() -> u32;

/// Provider loaded from a shared library at run time.
///
/// The function pointers stay valid for as long as `_library` is loaded,
/// which is the lifetime of this value.
#[derive(Debug)]
pub struct DynamicProvider {
    path: PathBuf,
    double_input: NumericFn,
    third_input: NumericFn,
    _library: Library,
}

impl DynamicProvider {
    /// Open `path` and resolve the contract symbols.
    ///
    /// The library's ABI version is checked before the numeric symbols are
    /// looked up.
    pub fn load(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        info!("Loading provider library {}", path.display());

        // Safety: loading runs the library's initialisers. The path comes
        // from the operator and is trusted to be a provider build.
        let library = unsafe { Library::new(path) }.map_err(|source| BridgeError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let version: VersionFn = unsafe { resolve(&library, contract::ABI_VERSION_SYMBOL)? };
        let found = unsafe { version() };
        if found != contract::ABI_VERSION {
            return Err(BridgeError::AbiMismatch {
                expected: contract::ABI_VERSION,
                found,
            });
        }
        debug!("Provider ABI version {}", found);

        let double_input: NumericFn = unsafe { resolve(&library, contract::DOUBLE_INPUT)? };
        let third_input: NumericFn = unsafe { resolve(&library, contract::THIRD_INPUT)? };

        Ok(Self {
            path: path.to_path_buf(),
            double_input,
            third_input,
            _library: library,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Look up `symbol` and copy out the function pointer.
///
/// # Safety
/// `T` must match the signature the library exports under `symbol`.
unsafe fn resolve<T: Copy>(library: &Library, symbol: &'static str) -> BridgeResult<T> {
    library
        .get::<T>(symbol.as_bytes())
        .map(|sym| *sym)
        .map_err(|source| BridgeError::MissingSymbol { symbol, source })
}

impl Provider for DynamicProvider {
    fn double_input(&self, input: i32) -> i32 {
        // Safety: signature verified against the contract version on load.
        unsafe { (self.double_input)(input) }
    }

    fn third_input(&self, input: i32) -> i32 {
        // Safety: as above.
        unsafe { (self.third_input)(input) }
    }

    fn describe(&self) -> String {
        format!("dynamic: {}", self.path.display())
    }
}
