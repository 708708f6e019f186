//! Data access for users.
//!
//! Every method of [`UserStore`] maps to exactly one SQL statement.
mod postgres;

#[cfg(test)]
pub(crate) mod memory;

pub use postgres::PgUserStore;

use crate::{
  database::Result,
  query::{PageRequest, UpdateStatement},
  schema::UserRow,
  types::{NewUser, UserId},
};

#[allow(async_fn_in_trait)]
pub trait UserStore {
  /// Inserts a new unblocked user and returns the stored row.
  async fn insert(&self, user: &NewUser) -> Result<UserRow>;

  async fn find(&self, id: UserId) -> Result<Option<UserRow>>;

  /// Rows with an id greater than the page's cursor, ordered by id.
  async fn list(&self, page: &PageRequest) -> Result<Vec<UserRow>>;

  /// Returns `None` if the user does not exist.
  async fn update(&self, statement: &UpdateStatement) -> Result<Option<UserRow>>;

  /// Returns the number of deleted rows.
  async fn delete(&self, id: UserId) -> Result<u64>;

  /// Returns the number of updated rows.
  async fn set_blocked(&self, id: UserId, blocked: bool) -> Result<u64>;
}
