use error_stack::Report;
use thiserror::Error;

/// Database related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// The statement failed. The underlying [`sqlx`] error is
  /// kept in the report.
  #[error("database statement failed")]
  Internal,
  /// The database pool does not have a reliable connection
  /// to the database.
  #[error("unhealthy database pool")]
  UnhealthyPool,
}

/// Converts from a generic [sqlx] result into a [database compatible error](Error).
pub trait ErrorExt<T> {
  fn into_db_error(self) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, sqlx::Error> {
  fn into_db_error(self) -> Result<T> {
    self.map_err(|e| match &e {
      sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
        Report::new(e).change_context(Error::UnhealthyPool)
      }
      _ => Report::new(e).change_context(Error::Internal),
    })
  }
}

/// Lazily typed [`std::result::Result`] but the error generic
/// is filled up with [a database error](Error).
pub type Result<T> = error_stack::Result<T, Error>;

/// Saves matching on [`Report::current_context`] when only
/// the kind of database error matters.
pub trait ErrorExt2 {
  fn is_unhealthy(&self) -> bool;
}

impl ErrorExt2 for Report<Error> {
  fn is_unhealthy(&self) -> bool {
    matches!(self.current_context(), Error::UnhealthyPool)
  }
}
