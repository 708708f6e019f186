use serde::Deserialize;

/// Update semantics of a single field in a sparse update request.
///
/// Requests are classified into this type once, at the request
/// boundary. Everything past that point only matches on variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
  /// The field was not mentioned. The stored value stays as is.
  Absent,
  /// The field must be cleared (set to `NULL` in the database).
  Clear,
  /// The field must be set to this value.
  Present(T),
}

impl<T> Patch<T> {
  #[must_use]
  pub const fn is_absent(&self) -> bool {
    matches!(self, Self::Absent)
  }

  /// Converts the value of a present field, keeping the other states.
  pub fn try_map<U, E, F>(self, f: F) -> Result<Patch<U>, E>
  where
    F: FnOnce(T) -> Result<U, E>,
  {
    Ok(match self {
      Self::Absent => Patch::Absent,
      Self::Clear => Patch::Clear,
      Self::Present(value) => Patch::Present(f(value)?),
    })
  }

  /// Returns the value that has to be written, if any.
  ///
  /// `None` means the field is not touched; `Some(None)` means the
  /// field has to be cleared.
  #[must_use]
  pub fn into_write(self) -> Option<Option<T>> {
    match self {
      Self::Absent => None,
      Self::Clear => Some(None),
      Self::Present(value) => Some(Some(value)),
    }
  }

  /// Collapses the field into the value stored on creation, where
  /// there's nothing to leave unchanged: both [`Patch::Absent`]
  /// and [`Patch::Clear`] become `None`.
  #[must_use]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Absent | Self::Clear => None,
      Self::Present(value) => Some(value),
    }
  }
}

impl<T> Default for Patch<T> {
  fn default() -> Self {
    Self::Absent
  }
}

impl Patch<String> {
  /// Legacy clearing marker for text fields.
  pub const CLEAR_MARKER: &'static str = "null";

  /// Classifies a raw text field with the following precedence:
  /// the clearing marker, then the empty string (not mentioned),
  /// then a concrete value.
  #[must_use]
  pub fn classify_text(self) -> Self {
    match self {
      Self::Present(value) if value == Self::CLEAR_MARKER => Self::Clear,
      Self::Present(value) if value.is_empty() => Self::Absent,
      other => other,
    }
  }
}

impl<T> From<Option<T>> for Patch<T> {
  /// A mentioned field: `None` clears it.
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Clear,
    }
  }
}

// A missing key never reaches this impl (it becomes `Absent`
// through `#[serde(default)]`), so an explicit `null` means clear.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    Option::<T>::deserialize(deserializer).map(Self::from)
  }
}

#[cfg(test)]
mod tests {
  use super::Patch;
  use serde::Deserialize;
  use serde_test::Token;

  #[test]
  fn test_classify_text() {
    let classify = |v: &str| Patch::Present(v.to_string()).classify_text();

    assert_eq!(classify("null"), Patch::Clear);
    assert_eq!(classify(""), Patch::Absent);
    assert_eq!(classify("Ashgabat"), Patch::Present("Ashgabat".into()));
    // only the exact marker clears the field
    assert_eq!(classify("NULL"), Patch::Present("NULL".into()));
    assert_eq!(classify(" "), Patch::Present(" ".into()));

    assert_eq!(Patch::<String>::Absent.classify_text(), Patch::Absent);
    assert_eq!(Patch::<String>::Clear.classify_text(), Patch::Clear);
  }

  #[test]
  fn test_into_write() {
    assert_eq!(Patch::<u8>::Absent.into_write(), None);
    assert_eq!(Patch::<u8>::Clear.into_write(), Some(None));
    assert_eq!(Patch::Present(1).into_write(), Some(Some(1)));

    assert_eq!(Patch::<u8>::Clear.into_option(), None);
    assert_eq!(Patch::Present(1).into_option(), Some(1));
  }

  #[test]
  fn test_try_map() {
    let result: Result<Patch<u8>, &str> = Patch::Present(2_u8).try_map(|v| Ok(v * 2));
    assert_eq!(result, Ok(Patch::Present(4)));
    let result: Result<Patch<u8>, &str> = Patch::<u8>::Clear.try_map(|_| Err("bad"));
    assert_eq!(result, Ok(Patch::Clear));

    let result: Result<Patch<u8>, &str> = Patch::Present(1_u8).try_map(|_| Err("bad"));
    assert_eq!(result, Err("bad"));
    let result: Result<Patch<u8>, &str> = Patch::<u8>::Absent.try_map(|_| Err("bad"));
    assert_eq!(result, Ok(Patch::Absent));
  }

  #[test]
  fn test_deserialize_tokens() {
    serde_test::assert_de_tokens(&Patch::<String>::Clear, &[Token::None]);
    serde_test::assert_de_tokens(
      &Patch::Present("Mary".to_string()),
      &[Token::Some, Token::Str("Mary")],
    );
  }

  #[test]
  fn test_deserialize_missing_null_and_value() {
    #[derive(Debug, Deserialize)]
    struct Form {
      #[serde(default)]
      first_name: Patch<String>,
      #[serde(default)]
      last_name: Patch<String>,
      #[serde(default)]
      email: Patch<String>,
    }

    let form: Form =
      serde_json::from_str(r#"{ "last_name": null, "email": "a@b.tm" }"#).unwrap();

    assert_eq!(form.first_name, Patch::Absent);
    assert_eq!(form.last_name, Patch::Clear);
    assert_eq!(form.email, Patch::Present("a@b.tm".into()));
  }
}
