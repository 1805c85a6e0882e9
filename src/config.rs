//! Command-line and environment configuration of the Caller.
//!
//! Running with no arguments reproduces the reference run: input 4,
//! link-time Rust provider, sequential calls.

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, ValueEnum};

use crate::caller::Mode;

/// Which statically linked provider to call.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ProviderKind {
    /// The crate's own `extern "C"` exports
    Rust,
    /// The C implementation built from `csrc/`
    C,
}

#[derive(Parser, Debug)]
#[command(
    name = "numeric-bridge",
    version,
    about = "Calls double_input and third_input across the C ABI"
)]
pub struct Config {
    /// Value passed to both provider functions
    #[arg(
        long,
        default_value_t = 4,
        allow_negative_numbers = true,
        env = "NUMERIC_BRIDGE_INPUT"
    )]
    pub input: i32,

    /// Linked provider to call
    #[arg(
        long,
        value_enum,
        default_value = "rust",
        conflicts_with = "library",
        env = "NUMERIC_BRIDGE_PROVIDER"
    )]
    pub provider: ProviderKind,

    /// Load the provider from this shared library instead of a linked one
    #[arg(long, value_name = "PATH", env = "NUMERIC_BRIDGE_LIBRARY")]
    pub library: Option<PathBuf>,

    /// Invoke both functions concurrently
    #[arg(
        long,
        env = "NUMERIC_BRIDGE_PARALLEL",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub parallel: bool,

    /// Print the C header of the exported interface and exit
    #[arg(long)]
    pub emit_header: bool,

    /// Debug mode
    #[arg(
        long,
        short = 'd',
        env = "NUMERIC_BRIDGE_DEBUG",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,

    /// Trace mode
    #[arg(
        long,
        env = "NUMERIC_BRIDGE_TRACE",
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub trace: bool,
}

impl Config {
    pub fn mode(&self) -> Mode {
        if self.parallel {
            Mode::Parallel
        } else {
            Mode::Sequential
        }
    }
}
