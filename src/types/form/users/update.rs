use serde::Deserialize;

use crate::{
  service::UserError,
  types::{Date, Patch, UserPatch},
};

/// Body of `PATCH /users/{id}`.
///
/// A missing key or `""` leaves the field unchanged, `null` or the
/// `"null"` marker clears it. `date_of_birth` is cleared by `null`
/// or by an all-zero date.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name: Patch<String>,
  #[serde(default)]
  pub phone_number: Option<String>,
  #[serde(default)]
  pub gender: Patch<String>,
  #[serde(default)]
  pub date_of_birth: Patch<Date>,
  #[serde(default)]
  pub location: Patch<String>,
  #[serde(default)]
  pub email: Patch<String>,
  #[serde(default)]
  pub profile_photo_url: Patch<String>,
}

impl Request {
  pub fn into_patch(self) -> Result<UserPatch, UserError> {
    Ok(UserPatch {
      first_name: self.first_name.classify_text(),
      last_name: self.last_name.classify_text(),
      phone_number: self.phone_number.filter(|v| !v.is_empty()),
      gender: self.gender.classify_text(),
      date_of_birth: super::date_patch(self.date_of_birth)?,
      location: self.location.classify_text(),
      email: self.email.classify_text(),
      profile_photo_url: self.profile_photo_url.classify_text(),
    })
  }
}
