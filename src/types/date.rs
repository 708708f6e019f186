use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Patch;

/// Calendar date without a time component, as exposed to clients.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Date {
  pub year: i32,
  pub month: u32,
  pub day: u32,
}

impl Date {
  #[must_use]
  pub const fn new(year: i32, month: u32, day: u32) -> Self {
    Self { year, month, day }
  }

  /// The all-zero triple, used by clients to clear a date.
  #[must_use]
  pub const fn is_zero(&self) -> bool {
    self.year == 0 && self.month == 0 && self.day == 0
  }

  /// Returns `None` if the triple is not a real calendar date.
  #[must_use]
  pub fn to_naive(self) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(self.year, self.month, self.day)
  }
}

impl From<NaiveDate> for Date {
  fn from(value: NaiveDate) -> Self {
    Self {
      year: value.year(),
      month: value.month(),
      day: value.day(),
    }
  }
}

impl Patch<Date> {
  /// Classifies a raw date field: the all-zero triple clears
  /// the field, anything else is kept as is.
  #[must_use]
  pub fn classify_date(self) -> Self {
    match self {
      Self::Present(date) if date.is_zero() => Self::Clear,
      other => other,
    }
  }
}
