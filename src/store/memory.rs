use chrono::Utc;
use std::{collections::BTreeMap, sync::Mutex, time::Duration};

use super::UserStore;
use crate::{
  database::{Error, Result},
  query::{Assignment, Column, PageRequest, UpdateStatement, Value},
  schema::UserRow,
  types::{NewUser, UserId},
};

/// An in-memory `users` table.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
  state: Mutex<State>,
  delay: Option<Duration>,
  unhealthy: bool,
}

#[derive(Debug, Default)]
struct State {
  last_id: i64,
  rows: BTreeMap<UserId, UserRow>,
}

impl MemoryUserStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Every statement waits this long before running.
  pub fn with_delay(delay: Duration) -> Self {
    Self {
      delay: Some(delay),
      ..Self::default()
    }
  }

  /// Every statement fails as if the pool lost its connections.
  pub fn unhealthy() -> Self {
    Self {
      unhealthy: true,
      ..Self::default()
    }
  }

  pub fn rows(&self) -> Vec<UserRow> {
    self.state.lock().unwrap().rows.values().cloned().collect()
  }

  async fn begin(&self) -> Result<std::sync::MutexGuard<'_, State>> {
    if let Some(delay) = self.delay {
      tokio::time::sleep(delay).await;
    }
    if self.unhealthy {
      return Err(Error::UnhealthyPool.into());
    }
    Ok(self.state.lock().unwrap())
  }
}

fn apply(row: &mut UserRow, assignment: &Assignment) {
  match (assignment.column, &assignment.value) {
    (Column::PhoneNumber, Value::Text(Some(value))) => row.phone_number = value.clone(),
    (Column::FirstName, Value::Text(value)) => row.first_name = value.clone(),
    (Column::LastName, Value::Text(value)) => row.last_name = value.clone(),
    (Column::Gender, Value::Text(value)) => row.gender = value.clone(),
    (Column::DateOfBirth, Value::Date(value)) => row.date_of_birth = *value,
    (Column::Location, Value::Text(value)) => row.location = value.clone(),
    (Column::Email, Value::Text(value)) => row.email = value.clone(),
    (Column::ProfilePhotoUrl, Value::Text(value)) => row.profile_photo_url = value.clone(),
    (column, value) => panic!("{column:?} cannot be set to {value:?}"),
  }
}

impl UserStore for MemoryUserStore {
  async fn insert(&self, user: &NewUser) -> Result<UserRow> {
    let mut state = self.begin().await?;
    state.last_id += 1;

    let row = UserRow {
      id: UserId::new(state.last_id),
      first_name: user.first_name.clone(),
      last_name: user.last_name.clone(),
      phone_number: user.phone_number.clone(),
      blocked: false,
      gender: user.gender.clone(),
      date_of_birth: user.date_of_birth,
      location: user.location.clone(),
      email: user.email.clone(),
      profile_photo_url: user.profile_photo_url.clone(),
      registration_date: Utc::now().naive_utc(),
    };
    state.rows.insert(row.id, row.clone());
    Ok(row)
  }

  async fn find(&self, id: UserId) -> Result<Option<UserRow>> {
    let state = self.begin().await?;
    Ok(state.rows.get(&id).cloned())
  }

  async fn list(&self, page: &PageRequest) -> Result<Vec<UserRow>> {
    let state = self.begin().await?;
    let rows = match page.after() {
      Some(after) => state.rows.range(after..),
      None => state.rows.range(..),
    };
    Ok(rows
      .filter(|(id, _)| Some(**id) != page.after())
      .take(page.size() as usize)
      .map(|(_, row)| row.clone())
      .collect())
  }

  async fn update(&self, statement: &UpdateStatement) -> Result<Option<UserRow>> {
    let mut state = self.begin().await?;
    let Some(row) = state.rows.get_mut(&statement.id()) else {
      return Ok(None);
    };
    for assignment in statement.assignments() {
      apply(row, assignment);
    }
    Ok(Some(row.clone()))
  }

  async fn delete(&self, id: UserId) -> Result<u64> {
    let mut state = self.begin().await?;
    Ok(u64::from(state.rows.remove(&id).is_some()))
  }

  async fn set_blocked(&self, id: UserId, blocked: bool) -> Result<u64> {
    let mut state = self.begin().await?;
    Ok(match state.rows.get_mut(&id) {
      Some(row) => {
        row.blocked = blocked;
        1
      }
      None => 0,
    })
  }
}
