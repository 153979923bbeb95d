//! `tracing` subscriber setup.
//!
//! Filter precedence: `RUST_LOG`, then `-v`/`-vv`, then `[log] filter` from
//! the configuration, then warnings only. Logs go to stderr.

use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8, configured: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, configured)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn default_directive(verbose: u8, configured: Option<&str>) -> String {
    match (verbose, configured) {
        (0, Some(directive)) => directive.to_owned(),
        (0, None) => "warn".to_owned(),
        (1, _) => "info".to_owned(),
        _ => "debug".to_owned(),
    }
}
