use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Date, Patch, Timestamp, UserId};

/// A user as exposed to clients.
///
/// Optional attributes that are unset in the database are `None`
/// and left out of the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
  pub id: UserId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub first_name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub last_name: Option<String>,
  pub phone_number: String,
  pub blocked: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub gender: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_of_birth: Option<Date>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub profile_photo_url: Option<String>,
  pub registration_date: Timestamp,
}

/// Attributes of a user to be created. `id`, `blocked` and
/// `registration_date` are decided by the database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
  pub first_name: Option<String>,
  pub last_name: Option<String>,
  pub phone_number: String,
  pub gender: Option<String>,
  pub date_of_birth: Option<NaiveDate>,
  pub location: Option<String>,
  pub email: Option<String>,
  pub profile_photo_url: Option<String>,
}

/// Sparse set of changes applied to an existing user.
///
/// `phone_number` cannot be cleared, so it is either left
/// unchanged (`None`) or replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
  pub first_name: Patch<String>,
  pub last_name: Patch<String>,
  pub phone_number: Option<String>,
  pub gender: Patch<String>,
  pub date_of_birth: Patch<NaiveDate>,
  pub location: Patch<String>,
  pub email: Patch<String>,
  pub profile_photo_url: Patch<String>,
}

impl UserPatch {
  /// Whether applying this patch would not change anything.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.phone_number.is_none()
      && self.first_name.is_absent()
      && self.last_name.is_absent()
      && self.gender.is_absent()
      && self.date_of_birth.is_absent()
      && self.location.is_absent()
      && self.email.is_absent()
      && self.profile_photo_url.is_absent()
  }
}
