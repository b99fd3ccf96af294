use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive (e.g. `lwcli=debug`).
pub const LOG_ENV: &str = "LW_LOG";

/// Initialize tracing on stderr.
///
/// `LW_LOG` wins when it holds a valid filter; otherwise `--debug` selects
/// `debug` and everything else logs warnings only. Stdout stays reserved for
/// command output.
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if debug { "debug" } else { "warn" })
    });

    // A subscriber may already be installed (tests); keep the first one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init();
}
