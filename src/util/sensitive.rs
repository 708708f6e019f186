use serde::Deserialize;
use std::fmt::{Debug, Display};

/// Keeps a secret (such as the database password) in memory
/// without leaking it through `Debug`, `Display` or logs.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(value)
  }

  #[must_use]
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T: AsRef<str>> Sensitive<T> {
  #[must_use]
  pub fn as_str(&self) -> &str {
    self.0.as_ref()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.0.as_ref().is_empty()
  }
}

impl<T> Debug for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("<hidden>").finish()
  }
}

impl<T> Display for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str("<hidden>")
  }
}

impl<T> From<T> for Sensitive<T> {
  fn from(value: T) -> Self {
    Self(value)
  }
}
