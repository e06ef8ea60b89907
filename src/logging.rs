use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs a stderr subscriber filtered by `RUST_LOG`, so that stdout only
/// carries benchmark results.
pub fn init() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

  // A second call (e.g. from tests) keeps the first subscriber.
  let _ = tracing_subscriber::registry().with(filter).with(stderr_layer).try_init();
}
