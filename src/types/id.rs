use serde::de::{Error as DeError, Unexpected};
use std::{
  fmt::{Debug, Display},
  str::FromStr,
};
use thiserror::Error;

/// Identifier of a user, assigned by the database on creation.
///
/// It is always positive. A zero or negative value can never be
/// constructed from user input, so operations targeting a user do
/// not need to check it again.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(i64);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("user id must be a positive integer")]
pub struct InvalidUserId;

impl UserId {
  /// # Panics
  ///
  /// It will panic if the value is not positive.
  #[must_use]
  #[track_caller]
  pub const fn new(n: i64) -> Self {
    if let Some(id) = Self::new_checked(n) {
      id
    } else {
      panic!("user id is not positive")
    }
  }

  #[must_use]
  pub const fn new_checked(n: i64) -> Option<Self> {
    if n > 0 {
      Some(Self(n))
    } else {
      None
    }
  }

  #[must_use]
  pub const fn get(self) -> i64 {
    self.0
  }
}

impl TryFrom<i64> for UserId {
  type Error = InvalidUserId;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    Self::new_checked(value).ok_or(InvalidUserId)
  }
}

impl FromStr for UserId {
  type Err = InvalidUserId;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim()
      .parse::<i64>()
      .map_err(|_| InvalidUserId)
      .and_then(Self::try_from)
  }
}

impl Debug for UserId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "UserId({})", self.0)
  }
}

impl Display for UserId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    Display::fmt(&self.0, f)
  }
}

impl<'de> serde::Deserialize<'de> for UserId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
      type Value = UserId;

      fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a positive user id")
      }

      fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
      where
        E: DeError,
      {
        UserId::new_checked(v).ok_or_else(|| E::invalid_value(Unexpected::Signed(v), &self))
      }

      fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
      where
        E: DeError,
      {
        i64::try_from(v)
          .ok()
          .and_then(UserId::new_checked)
          .ok_or_else(|| E::invalid_value(Unexpected::Unsigned(v), &self))
      }

      fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
      where
        E: DeError,
      {
        v.parse()
          .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
      }
    }

    deserializer.deserialize_any(Visitor)
  }
}

impl serde::Serialize for UserId {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_i64(self.0)
  }
}
