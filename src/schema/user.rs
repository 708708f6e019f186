use chrono::{NaiveDate, NaiveDateTime};
use sqlx::FromRow;

use crate::{
  database::{Connection, ErrorExt, Result},
  query::{PageRequest, UpdateStatement},
  types::{NewUser, User, UserId},
};

/// Every column of `users`, in the order [`UserRow`] declares them.
pub const COLUMNS: &str = "id, first_name, last_name, phone_number, blocked, gender, \
                           date_of_birth, location, email, profile_photo_url, registration_date";

#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct UserRow {
  pub id: UserId,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub phone_number: String,
  pub blocked: bool,
  pub gender: Option<String>,
  pub date_of_birth: Option<NaiveDate>,
  pub location: Option<String>,
  pub email: Option<String>,
  pub profile_photo_url: Option<String>,
  pub registration_date: NaiveDateTime,
}

impl UserRow {
  #[tracing::instrument(skip_all, name = "query.users.insert")]
  pub async fn insert(conn: &mut Connection, user: &NewUser) -> Result<Self> {
    let sql = format!(
      "INSERT INTO users (first_name, last_name, phone_number, blocked, gender, \
       date_of_birth, location, email, profile_photo_url) \
       VALUES ($1, $2, $3, false, $4, $5, $6, $7, $8) \
       RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, Self>(&sql)
      .bind(user.first_name.as_deref())
      .bind(user.last_name.as_deref())
      .bind(user.phone_number.as_str())
      .bind(user.gender.as_deref())
      .bind(user.date_of_birth)
      .bind(user.location.as_deref())
      .bind(user.email.as_deref())
      .bind(user.profile_photo_url.as_deref())
      .fetch_one(conn)
      .await
      .into_db_error()
  }

  #[tracing::instrument(skip(conn), name = "query.users.by_id")]
  pub async fn by_id(conn: &mut Connection, id: UserId) -> Result<Option<Self>> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
    sqlx::query_as::<_, Self>(&sql)
      .bind(id)
      .fetch_optional(conn)
      .await
      .into_db_error()
  }

  #[tracing::instrument(skip(conn), name = "query.users.list")]
  pub async fn list(conn: &mut Connection, page: &PageRequest) -> Result<Vec<Self>> {
    let sql = format!("SELECT {COLUMNS} FROM users WHERE id > $1 ORDER BY id LIMIT $2");
    sqlx::query_as::<_, Self>(&sql)
      .bind(page.after().map_or(0, UserId::get))
      .bind(i64::from(page.size()))
      .fetch_all(conn)
      .await
      .into_db_error()
  }

  #[tracing::instrument(skip_all, fields(id = %statement.id()), name = "query.users.update")]
  pub async fn update(conn: &mut Connection, statement: &UpdateStatement) -> Result<Option<Self>> {
    statement
      .to_query()
      .build_query_as::<Self>()
      .fetch_optional(conn)
      .await
      .into_db_error()
  }

  /// Returns the number of deleted rows.
  #[tracing::instrument(skip(conn), name = "query.users.delete")]
  pub async fn delete(conn: &mut Connection, id: UserId) -> Result<u64> {
    sqlx::query("DELETE FROM users WHERE id = $1")
      .bind(id)
      .execute(conn)
      .await
      .into_db_error()
      .map(|result| result.rows_affected())
  }

  #[tracing::instrument(skip(conn), name = "query.users.set_blocked")]
  pub async fn set_blocked(conn: &mut Connection, id: UserId, blocked: bool) -> Result<u64> {
    sqlx::query("UPDATE users SET blocked = $1 WHERE id = $2")
      .bind(blocked)
      .bind(id)
      .execute(conn)
      .await
      .into_db_error()
      .map(|result| result.rows_affected())
  }
}

/// Unset columns come back as `NULL`, but older rows may still
/// hold empty strings. Both are reported as unset.
fn reconcile(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    Self {
      id: row.id,
      first_name: reconcile(row.first_name),
      last_name: reconcile(row.last_name),
      phone_number: row.phone_number,
      blocked: row.blocked,
      gender: reconcile(row.gender),
      date_of_birth: row.date_of_birth.map(Into::into),
      location: reconcile(row.location),
      email: reconcile(row.email),
      profile_photo_url: reconcile(row.profile_photo_url),
      registration_date: row.registration_date.into(),
    }
  }
}
