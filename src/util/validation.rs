use once_cell::sync::Lazy;
use regex::Regex;

/// Turkmenistan mobile numbers: `+993` followed by exactly eight digits.
#[allow(clippy::expect_used)]
static PHONE_NUMBER_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\+993\d{8}$").expect("compile phone number regex"));

/// Checks whether the phone number can be stored for a user.
///
/// Every write that sets `phone_number` must pass this check
/// before any statement is built.
pub fn is_valid_phone_number(phone: &str) -> bool {
  PHONE_NUMBER_REGEX.is_match(phone)
}
