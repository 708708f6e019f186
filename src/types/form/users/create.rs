use serde::Deserialize;

use crate::{
  service::UserError,
  types::{Date, NewUser, Patch},
};

/// Body of `POST /users`.
///
/// Optional fields follow the same wire rules as an update. Both a
/// cleared and an omitted field are stored as unset.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
  #[serde(default)]
  pub first_name: Patch<String>,
  #[serde(default)]
  pub last_name: Patch<String>,
  #[serde(default)]
  pub phone_number: String,
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
  pub fn into_new_user(self) -> Result<NewUser, UserError> {
    let text = |patch: Patch<String>| patch.classify_text().into_option();
    Ok(NewUser {
      first_name: text(self.first_name),
      last_name: text(self.last_name),
      phone_number: self.phone_number,
      gender: text(self.gender),
      date_of_birth: super::date_patch(self.date_of_birth)?.into_option(),
      location: text(self.location),
      email: text(self.email),
      profile_photo_url: text(self.profile_photo_url),
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  #[test]
  fn test_into_new_user() {
    let request: Request = serde_json::from_str(
      r#"{
        "first_name": "Merdan",
        "last_name": "",
        "phone_number": "+99365000000",
        "gender": "null",
        "date_of_birth": { "year": 1990, "month": 5, "day": 17 },
        "email": null
      }"#,
    )
    .unwrap();

    let user = request.into_new_user().unwrap();
    assert_eq!(
      user,
      NewUser {
        first_name: Some("Merdan".into()),
        phone_number: "+99365000000".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
        ..Default::default()
      }
    );
  }

  #[test]
  fn test_rejects_impossible_date() {
    let request: Request = serde_json::from_str(
      r#"{
        "phone_number": "+99365000000",
        "date_of_birth": { "year": 1990, "month": 4, "day": 31 }
      }"#,
    )
    .unwrap();

    let error = request.into_new_user().unwrap_err();
    assert!(matches!(error, UserError::InvalidArgument(..)));
  }
}
