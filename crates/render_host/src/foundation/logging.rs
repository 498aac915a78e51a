//! Logging utilities

use std::io::Write;

/// Initialize the logging system
///
/// Records go to stdout, one line each, so the event diagnostics read as plain
/// program output. `RUST_LOG` overrides the default `info` filter. Calling this
/// more than once is harmless.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "[{:<5}] {}", record.level(), record.args()))
        .try_init();
}
