use serde::Deserialize;
use std::{num::NonZeroU64, time::Duration};

/// Settings of the exposed user administration service.
#[derive(Debug, Deserialize)]
pub struct Service {
  /// **Environment variables**:
  /// - `SERVICE_HOST`
  #[serde(default = "Service::default_host")]
  pub host: String,
  /// **Environment variables**:
  /// - `SERVICE_PORT` or `GRPC_PORT`
  #[serde(default = "Service::default_port")]
  pub port: u16,
  /// Deadline of every user operation including its database
  /// statement. Operations exceeding it are aborted.
  ///
  /// **Environment variables**:
  /// - `SERVICE_TIMEOUT_SECS`
  #[serde(default = "Service::default_timeout_secs")]
  pub timeout_secs: NonZeroU64,
}

impl Service {
  const DEFAULT_PORT: u16 = 8080;
  const DEFAULT_TIMEOUT_SECS: u64 = 10;

  fn default_host() -> String {
    "0.0.0.0".into()
  }

  const fn default_port() -> u16 {
    Self::DEFAULT_PORT
  }

  const fn default_timeout_secs() -> NonZeroU64 {
    match NonZeroU64::new(Self::DEFAULT_TIMEOUT_SECS) {
      Some(n) => n,
      None => panic!("DEFAULT_TIMEOUT_SECS is accidentally set to 0"),
    }
  }

  #[must_use]
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs.get())
  }
}

impl Default for Service {
  fn default() -> Self {
    Self {
      host: Self::default_host(),
      port: Self::default_port(),
      timeout_secs: Self::default_timeout_secs(),
    }
  }
}
