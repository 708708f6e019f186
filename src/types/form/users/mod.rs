use chrono::NaiveDate;

use crate::{
  service::UserError,
  types::{Date, Patch},
};

pub mod create;
pub mod list;
pub mod update;

/// Classifies a wire date and checks that it names a real calendar day.
fn date_patch(raw: Patch<Date>) -> Result<Patch<NaiveDate>, UserError> {
  raw.classify_date().try_map(|date| {
    date.to_naive().ok_or_else(|| {
      UserError::invalid_argument(format!(
        "invalid date_of_birth: {:04}-{:02}-{:02}",
        date.year, date.month, date.day
      ))
    })
  })
}
