use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::{
  num::{NonZeroU32, NonZeroU64},
  time::Duration,
};

use crate::util::Sensitive;

/// Connection parameters of the Postgres database holding the
/// `users` table.
#[derive(Debug, Deserialize)]
pub struct Database {
  /// **Environment variables**:
  /// - `DB_HOST`
  #[serde(default)]
  pub host: String,
  /// **Environment variables**:
  /// - `DB_PORT`
  #[serde(default)]
  pub port: u16,
  /// **Environment variables**:
  /// - `DB_USER`
  #[serde(default)]
  pub user: String,
  /// **Environment variables**:
  /// - `DB_PASSWORD`
  #[serde(default)]
  pub password: Sensitive<String>,
  /// **Environment variables**:
  /// - `DB_NAME`
  #[serde(default)]
  pub name: String,
  /// Maximum amount of connections the pool can hold.
  ///
  /// **Environment variables**:
  /// - `DB_POOL_SIZE`
  #[serde(default = "Database::default_pool_size")]
  pub pool_size: NonZeroU32,
  /// Minimum idle connections kept open by the pool.
  ///
  /// **Environment variables**:
  /// - `DB_MIN_IDLE`
  #[serde(default)]
  pub min_idle: Option<NonZeroU32>,
  /// How long the server waits for a connection to be acquired
  /// (or established) before giving up.
  ///
  /// **Environment variables**:
  /// - `DB_TIMEOUT_SECS`
  #[serde(default = "Database::default_timeout_secs")]
  pub timeout_secs: NonZeroU64,
  /// Prefers TLS encrypted connections to the database.
  ///
  /// **Environment variables**:
  /// - `DB_ENFORCE_TLS`
  #[serde(default)]
  pub enforce_tls: bool,
}

impl Database {
  const DEFAULT_POOL_SIZE: u32 = 5;
  const DEFAULT_TIMEOUT_SECS: u64 = 5;

  // Required by serde
  const fn default_pool_size() -> NonZeroU32 {
    match NonZeroU32::new(Self::DEFAULT_POOL_SIZE) {
      Some(n) => n,
      None => panic!("DEFAULT_POOL_SIZE is accidentally set to 0"),
    }
  }

  const fn default_timeout_secs() -> NonZeroU64 {
    match NonZeroU64::new(Self::DEFAULT_TIMEOUT_SECS) {
      Some(n) => n,
      None => panic!("DEFAULT_TIMEOUT_SECS is accidentally set to 0"),
    }
  }
}

impl Default for Database {
  fn default() -> Self {
    Self {
      host: String::new(),
      port: 0,
      user: String::new(),
      password: Sensitive::default(),
      name: String::new(),
      pool_size: Self::default_pool_size(),
      min_idle: None,
      timeout_secs: Self::default_timeout_secs(),
      enforce_tls: false,
    }
  }
}

impl Database {
  #[must_use]
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs.get())
  }

  #[must_use]
  pub fn connect_options(&self) -> PgConnectOptions {
    let ssl_mode = if self.enforce_tls {
      PgSslMode::Prefer
    } else {
      PgSslMode::Disable
    };

    PgConnectOptions::new()
      .host(&self.host)
      .port(self.port)
      .username(&self.user)
      .password(self.password.as_str())
      .database(&self.name)
      .ssl_mode(ssl_mode)
  }

  /// Names of the required environment variables that are
  /// either missing or empty.
  pub(super) fn missing_vars(&self) -> Vec<&'static str> {
    let checks = [
      ("DB_HOST", self.host.is_empty()),
      ("DB_PORT", self.port == 0),
      ("DB_USER", self.user.is_empty()),
      ("DB_PASSWORD", self.password.is_empty()),
      ("DB_NAME", self.name.is_empty()),
    ];

    checks
      .into_iter()
      .filter_map(|(var, missing)| missing.then_some(var))
      .collect()
  }
}
