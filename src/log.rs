//! Logging utilities

use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

pub(crate) fn parse_log_level() {
    let filter = EnvFilter::try_from_env("PWCLOCKCTL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive("async_std=error".parse().unwrap())
        .add_directive("async_io=error".parse().unwrap())
        .add_directive("polling=error".parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!("Initialised logger: welcome to pwclockctl!");
}

/// Create an oops (a fatal crash) with an associated error message
pub(crate) fn oops<S: Into<String>>(msg: S, code: u16) -> ! {
    error!("{}", msg.into());
    std::process::exit(code.into());
}
