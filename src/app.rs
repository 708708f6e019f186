use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database, service::UserService, store::PgUserStore};

/// Process-wide state: the loaded configuration and the database pool.
#[derive(Debug, Clone)]
pub struct App {
  pub config: Arc<config::Server>,
  pub db: database::Pool,
}

#[derive(Debug, Error)]
#[error("failed to initialize App struct")]
pub struct AppError;

impl App {
  #[tracing::instrument(skip_all)]
  pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
    let db = database::Pool::new(&cfg.db)
      .await
      .change_context(AppError)?;
    tracing::info!(connections = db.connections(), "connected to the database");

    Ok(Self {
      config: Arc::new(cfg),
      db,
    })
  }

  #[must_use]
  pub fn users(&self) -> UserService<PgUserStore> {
    UserService::new(PgUserStore::new(self.db.clone()), self.config.service.timeout())
  }
}
