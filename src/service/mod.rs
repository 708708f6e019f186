//! User operations on top of a [`UserStore`].
//!
//! Each operation issues a single statement and is bounded by the
//! configured deadline. Nothing is retried.
use error_stack::{Report, ResultExt};
use std::{future::Future, time::Duration};

use crate::{
  database,
  query::{update::invalid_phone_number, Page, PageRequest, UpdateStatement},
  store::UserStore,
  types::{NewUser, User, UserId, UserPatch},
  util::validation::is_valid_phone_number,
};

mod error;

pub use error::{Result, UserError};

#[derive(Debug, Clone)]
pub struct UserService<S> {
  store: S,
  timeout: Duration,
}

impl<S: UserStore> UserService<S> {
  #[must_use]
  pub fn new(store: S, timeout: Duration) -> Self {
    Self { store, timeout }
  }

  #[must_use]
  pub fn store(&self) -> &S {
    &self.store
  }

  /// Runs a store operation under the service deadline. The store
  /// future is dropped once the deadline passes, which aborts its
  /// pending statement. Both store failures and an elapsed deadline
  /// surface as [`UserError::Internal`].
  async fn run<T, F>(&self, operation: F) -> Result<T>
  where
    F: Future<Output = database::Result<T>>,
  {
    match tokio::time::timeout(self.timeout, operation).await {
      Ok(result) => result.change_context(UserError::Internal),
      Err(elapsed) => Err(
        Report::new(elapsed)
          .change_context(UserError::Internal)
          .attach_printable(format!("operation did not finish within {:?}", self.timeout)),
      ),
    }
  }

  #[tracing::instrument(skip_all, name = "users.create")]
  pub async fn create_user(&self, user: NewUser) -> Result<User> {
    if !is_valid_phone_number(&user.phone_number) {
      return Err(invalid_phone_number().into());
    }

    let row = self.run(self.store.insert(&user)).await?;
    tracing::info!(id = %row.id, "created user");

    Ok(row.into())
  }

  #[tracing::instrument(skip(self), name = "users.get")]
  pub async fn get_user(&self, id: UserId) -> Result<User> {
    self
      .run(self.store.find(id))
      .await?
      .map(User::from)
      .ok_or_else(|| Report::new(UserError::NotFound))
  }

  #[tracing::instrument(skip(self), name = "users.list")]
  pub async fn list_users(&self, page: PageRequest) -> Result<Page<User>> {
    let rows = self.run(self.store.list(&page)).await?;
    Ok(page.finish(rows, |row| row.id).map(User::from))
  }

  /// Applies a sparse set of changes and returns the updated user.
  ///
  /// A patch that changes nothing does not touch the database
  /// and returns the user as it is.
  #[tracing::instrument(skip(self, patch), name = "users.update")]
  pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User> {
    let row = match UpdateStatement::build(id, patch)? {
      Some(statement) => self.run(self.store.update(&statement)).await?,
      None => {
        tracing::debug!("nothing to update");
        self.run(self.store.find(id)).await?
      }
    };
    row.map(User::from).ok_or_else(|| Report::new(UserError::NotFound))
  }

  #[tracing::instrument(skip(self), name = "users.delete")]
  pub async fn delete_user(&self, id: UserId) -> Result<()> {
    if self.run(self.store.delete(id)).await? == 0 {
      return Err(UserError::NotFound.into());
    }
    tracing::info!(%id, "deleted user");
    Ok(())
  }

  #[tracing::instrument(skip(self), name = "users.set_blocked")]
  pub async fn set_blocked(&self, id: UserId, blocked: bool) -> Result<()> {
    if self.run(self.store.set_blocked(id, blocked)).await? == 0 {
      return Err(UserError::NotFound.into());
    }
    if blocked {
      tracing::info!(%id, "blocked user");
    } else {
      tracing::info!(%id, "unblocked user");
    }
    Ok(())
  }

  pub async fn block_user(&self, id: UserId) -> Result<()> {
    self.set_blocked(id, true).await
  }

  pub async fn unblock_user(&self, id: UserId) -> Result<()> {
    self.set_blocked(id, false).await
  }
}
