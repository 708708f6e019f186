use chrono::NaiveDate;
use sqlx::{Postgres, QueryBuilder};

use crate::{
  schema::user::COLUMNS,
  service::UserError,
  types::{Patch, UserId, UserPatch},
  util::validation::is_valid_phone_number,
};

/// Updatable columns of the `users` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
  PhoneNumber,
  FirstName,
  LastName,
  Gender,
  DateOfBirth,
  Location,
  Email,
  ProfilePhotoUrl,
}

impl Column {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::PhoneNumber => "phone_number",
      Self::FirstName => "first_name",
      Self::LastName => "last_name",
      Self::Gender => "gender",
      Self::DateOfBirth => "date_of_birth",
      Self::Location => "location",
      Self::Email => "email",
      Self::ProfilePhotoUrl => "profile_photo_url",
    }
  }
}

/// Value bound to a column. `None` is written as SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
  Text(Option<String>),
  Date(Option<NaiveDate>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
  pub column: Column,
  pub value: Value,
}

/// A single `UPDATE users SET .. WHERE id = .. RETURNING ..` statement.
///
/// Both the SQL text and the bound arguments are derived from the
/// same ordered list of assignments, so placeholders and arguments
/// always line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
  id: UserId,
  assignments: Vec<Assignment>,
}

impl UpdateStatement {
  /// Returns `Ok(None)` if the patch does not change anything.
  ///
  /// The phone number is validated before anything else and always
  /// comes first, the rest follow in column order.
  pub fn build(id: UserId, patch: UserPatch) -> Result<Option<Self>, UserError> {
    let mut assignments = Vec::new();

    if let Some(phone_number) = patch.phone_number {
      if !is_valid_phone_number(&phone_number) {
        return Err(invalid_phone_number());
      }
      assignments.push(Assignment {
        column: Column::PhoneNumber,
        value: Value::Text(Some(phone_number)),
      });
    }

    push_text(&mut assignments, Column::FirstName, patch.first_name);
    push_text(&mut assignments, Column::LastName, patch.last_name);
    push_text(&mut assignments, Column::Gender, patch.gender);
    if let Some(value) = patch.date_of_birth.into_write() {
      assignments.push(Assignment {
        column: Column::DateOfBirth,
        value: Value::Date(value),
      });
    }
    push_text(&mut assignments, Column::Location, patch.location);
    push_text(&mut assignments, Column::Email, patch.email);
    push_text(&mut assignments, Column::ProfilePhotoUrl, patch.profile_photo_url);

    if assignments.is_empty() {
      Ok(None)
    } else {
      Ok(Some(Self { id, assignments }))
    }
  }

  #[must_use]
  pub const fn id(&self) -> UserId {
    self.id
  }

  #[must_use]
  pub fn assignments(&self) -> &[Assignment] {
    &self.assignments
  }

  #[must_use]
  pub fn to_query(&self) -> QueryBuilder<'_, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("UPDATE users SET ");

    let mut set = query.separated(", ");
    for assignment in &self.assignments {
      set.push(assignment.column.as_str());
      set.push_unseparated(" = ");
      match &assignment.value {
        Value::Text(value) => set.push_bind_unseparated(value.as_deref()),
        Value::Date(value) => set.push_bind_unseparated(*value),
      };
    }

    query.push(" WHERE id = ");
    query.push_bind(self.id);
    query.push(" RETURNING ");
    query.push(COLUMNS);
    query
  }
}

fn push_text(assignments: &mut Vec<Assignment>, column: Column, patch: Patch<String>) {
  if let Some(value) = patch.into_write() {
    assignments.push(Assignment {
      column,
      value: Value::Text(value),
    });
  }
}

pub(crate) fn invalid_phone_number() -> UserError {
  UserError::invalid_argument("invalid phone number: expected +993 followed by 8 digits")
}
