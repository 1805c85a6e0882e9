//! Failures of obtaining the Provider at run time.
//!
//! Arithmetic never fails; the only errors are environment-level ones
//! raised while loading a shared library. Each of them is fatal at startup.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("cannot load provider library {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        source: libloading::Error,
    },

    #[error("provider library does not export `{symbol}`: {source}")]
    MissingSymbol {
        symbol: &'static str,
        source: libloading::Error,
    },

    #[error("provider library speaks ABI version {found}, expected {expected}")]
    AbiMismatch { expected: u32, found: u32 },
}

pub type BridgeResult<T> = Result<T, BridgeError>;
