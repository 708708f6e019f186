use super::UserStore;
use crate::{
  database::{Pool, Result},
  query::{PageRequest, UpdateStatement},
  schema::UserRow,
  types::{NewUser, UserId},
};

/// [`UserStore`] backed by the Postgres `users` table.
#[derive(Debug, Clone)]
pub struct PgUserStore {
  pool: Pool,
}

impl PgUserStore {
  #[must_use]
  pub fn new(pool: Pool) -> Self {
    Self { pool }
  }
}

impl UserStore for PgUserStore {
  async fn insert(&self, user: &NewUser) -> Result<UserRow> {
    let mut conn = self.pool.get().await?;
    UserRow::insert(&mut *conn, user).await
  }

  async fn find(&self, id: UserId) -> Result<Option<UserRow>> {
    let mut conn = self.pool.get().await?;
    UserRow::by_id(&mut *conn, id).await
  }

  async fn list(&self, page: &PageRequest) -> Result<Vec<UserRow>> {
    let mut conn = self.pool.get().await?;
    UserRow::list(&mut *conn, page).await
  }

  async fn update(&self, statement: &UpdateStatement) -> Result<Option<UserRow>> {
    let mut conn = self.pool.get().await?;
    UserRow::update(&mut *conn, statement).await
  }

  async fn delete(&self, id: UserId) -> Result<u64> {
    let mut conn = self.pool.get().await?;
    UserRow::delete(&mut *conn, id).await
  }

  async fn set_blocked(&self, id: UserId, blocked: bool) -> Result<u64> {
    let mut conn = self.pool.get().await?;
    UserRow::set_blocked(&mut *conn, id, blocked).await
  }
}
