use anyhow::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn level_for_verbosity(debug: u8) -> &'static str {
    match debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// A non-empty `RUST_LOG` value wins over the `-d` count.
fn filter_directive(env_value: Option<&str>, debug: u8) -> String {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directive) => directive.to_string(),
        None => level_for_verbosity(debug).to_string(),
    }
}

/// Installs the stderr subscriber.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init_logging(debug: u8) -> Result<WorkerGuard, Error> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(env_value.as_deref(), debug);
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(debug)));

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| Error::msg(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
