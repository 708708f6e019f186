use error_stack::{Report, ResultExt};
use sqlx::postgres::PgPoolOptions;

use super::{Error, ErrorExt, ErrorExt2, PoolConnection, Result};
use crate::config;

/// A Postgres database connection pool.
///
/// The pool is shared between requests and synchronized internally.
/// Connections are acquired per operation and released as soon
/// as the operation's statement is done.
#[derive(Clone)]
pub struct Pool {
  pool: sqlx::PgPool,
}

impl Pool {
  /// Creates a connection pool from the database configuration and
  /// waits until it can reach the database (bounded by `timeout_secs`).
  pub async fn new(cfg: &config::Database) -> Result<Self> {
    let mut pool_opts = PgPoolOptions::new()
      .acquire_timeout(cfg.timeout())
      .max_connections(cfg.pool_size.get());

    if let Some(min_idle) = cfg.min_idle {
      pool_opts = pool_opts.min_connections(min_idle.get());
    }

    let pool = Self {
      pool: pool_opts.connect_lazy_with(cfg.connect_options()),
    };
    match pool.wait_until_healthy().await {
      Ok(()) => Ok(pool),
      Err(err) if err.is_unhealthy() => Err(err.attach_printable(format!(
        "could not reach {}:{} within {:?}",
        cfg.host,
        cfg.port,
        cfg.timeout()
      ))),
      Err(err) => Err(err),
    }
  }
}

impl From<sqlx::PgPool> for Pool {
  fn from(pool: sqlx::PgPool) -> Self {
    Self { pool }
  }
}

impl std::fmt::Debug for Pool {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.pool.fmt(f)
  }
}

impl Pool {
  /// Gets the active connections of a database pool
  #[inline(always)]
  pub fn connections(&self) -> u32 {
    self.pool.size()
  }

  /// It attempts to get an active database connection.
  #[tracing::instrument(name = "db.connect", skip(self))]
  pub async fn get(&self) -> Result<PoolConnection> {
    if let Some(inner) = self.pool.try_acquire() {
      Ok(inner)
    } else if self.pool.is_closed() {
      Err(Report::new(Error::UnhealthyPool))
    } else {
      self.pool.acquire().await.into_db_error()
    }
  }

  /// Waits for a database connection to be established until
  /// the acquire timeout (`db.timeout_secs`) elapses.
  #[tracing::instrument(skip(self))]
  pub async fn wait_until_healthy(&self) -> Result<()> {
    match self.pool.acquire().await {
      Ok(..) => Ok(()),
      Err(e @ sqlx::Error::PoolTimedOut) => Err(e).change_context(Error::UnhealthyPool),
      Err(err) => Err(Report::new(err).change_context(Error::Internal)),
    }
  }

  /// Closes every connection of the pool. Pending acquisitions fail
  /// and no new connections can be made afterwards.
  pub async fn close(&self) {
    self.pool.close().await;
  }
}
