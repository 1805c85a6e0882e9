//! Logger setup for the Caller binary.
//!
//! Records go to stderr; stdout carries only the result lines.

use std::io::Write;

use env_logger::{Builder, Env};

/// Environment variable holding an `env_logger` filter, e.g. `debug`.
pub const LOG_ENV: &str = "NUMERIC_BRIDGE_LOG";

pub fn setup_logger(trace: bool, debug: bool) {
    let default = if trace {
        "trace"
    } else if debug {
        "debug"
    } else {
        "warn"
    };

    let mut log_builder = Builder::from_env(Env::default().filter_or(LOG_ENV, default));
    log_builder.format(|buf, record| {
        writeln!(buf, "{}: {}: {}", buf.timestamp_millis(), record.level(), record.args())
    });
    log_builder.init();
}
