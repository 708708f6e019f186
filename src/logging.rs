use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

#[derive(Debug, Error)]
#[error("failed to initialize tracing")]
pub struct TracingInitError(#[source] tracing::subscriber::SetGlobalDefaultError);

/// Installs the global subscriber. Targets are read from `RUST_LOG`
/// and default to `info`.
pub fn init() -> Result<(), TracingInitError> {
  let targets = std::env::var("RUST_LOG").unwrap_or_default();
  let registry = tracing_subscriber::Registry::default()
    .with(make_env_filter(&targets))
    .with(tracing_subscriber::fmt::layer().with_target(true))
    .with(ErrorLayer::default());

  tracing::subscriber::set_global_default(registry).map_err(TracingInitError)
}

fn make_env_filter(targets: &str) -> EnvFilter {
  EnvFilter::builder()
    .with_default_directive(LevelFilter::INFO.into())
    .parse_lossy(targets)
}
