use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A point in time decomposed into its calendar and clock parts.
///
/// Every read path exposes the registration date of a user
/// in this shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Timestamp {
  pub year: i32,
  pub month: u32,
  pub day: u32,
  pub hour: u32,
  pub minute: u32,
  pub second: u32,
}

impl From<NaiveDateTime> for Timestamp {
  fn from(value: NaiveDateTime) -> Self {
    Self {
      year: value.year(),
      month: value.month(),
      day: value.day(),
      hour: value.hour(),
      minute: value.minute(),
      second: value.second(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn test_from_naive_date_time() {
    let value = NaiveDate::from_ymd_opt(2023, 10, 19)
      .and_then(|d| d.and_hms_milli_opt(8, 5, 59, 750))
      .unwrap();

    assert_eq!(
      Timestamp::from(value),
      Timestamp {
        year: 2023,
        month: 10,
        day: 19,
        hour: 8,
        minute: 5,
        second: 59,
      }
    );
  }
}
