//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "WAYFARER_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = wayfarer_cli::run() {
        eprintln!("wayfarer: {err}");
        std::process::exit(1);
    }
}
