use error_stack::Report;
use tracing_error::SpanTrace;

use crate::service::UserError;

mod impls;

pub type Result<T> = std::result::Result<T, Error>;

/// An error answered to an HTTP client, along with the span trace
/// of where it was raised.
pub struct Error {
  report: Report<UserError>,
  trace: SpanTrace,
}

impl Error {
  #[must_use]
  pub fn invalid_argument(message: impl Into<std::borrow::Cow<'static, str>>) -> Self {
    UserError::invalid_argument(message).into()
  }

  #[must_use]
  pub fn as_user_error(&self) -> &UserError {
    self.report.current_context()
  }
}

impl From<Report<UserError>> for Error {
  fn from(report: Report<UserError>) -> Self {
    Self {
      report,
      trace: SpanTrace::capture(),
    }
  }
}

impl From<UserError> for Error {
  fn from(value: UserError) -> Self {
    Report::new(value).into()
  }
}

impl std::fmt::Debug for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Error")
      .field("report", &self.report)
      .field("trace", &self.trace)
      .finish()
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "{:?}", self.report)?;
    std::fmt::Display::fmt(&self.trace, f)
  }
}
