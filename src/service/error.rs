use std::borrow::Cow;
use thiserror::Error;

/// Lazily typed [`std::result::Result`] where the error is a
/// [report](error_stack::Report) of a [user error](UserError).
pub type Result<T> = error_stack::Result<T, UserError>;

/// Failure kinds reported by user operations.
///
/// Internal failures keep their cause (database error, elapsed
/// deadline) in the surrounding report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
  #[error("invalid argument: {0}")]
  InvalidArgument(Cow<'static, str>),
  #[error("user not found")]
  NotFound,
  #[error("internal error")]
  Internal,
}

impl UserError {
  #[must_use]
  pub fn invalid_argument(message: impl Into<Cow<'static, str>>) -> Self {
    Self::InvalidArgument(message.into())
  }
}

#[cfg(test)]
mod tests {
  use error_stack::{Report, ResultExt};

  use super::*;
  use crate::database::{self, ErrorExt};

  #[test]
  fn test_internal_keeps_causes() {
    let result: std::result::Result<(), _> = Err(sqlx::Error::RowNotFound);
    let report = result
      .into_db_error()
      .change_context(UserError::Internal)
      .unwrap_err();

    assert_eq!(report.current_context(), &UserError::Internal);
    assert_eq!(
      report.downcast_ref::<database::Error>(),
      Some(&database::Error::Internal)
    );
    assert!(report.contains::<sqlx::Error>());
  }

  #[test]
  fn test_messages() {
    let error = UserError::invalid_argument("bad phone number");
    assert_eq!(error.to_string(), "invalid argument: bad phone number");

    let report = Report::new(UserError::NotFound);
    assert_eq!(report.current_context().to_string(), "user not found");
  }
}
