use actix_web::{
  body::BoxBody,
  error::{JsonPayloadError, QueryPayloadError},
  http::StatusCode,
  HttpResponse,
};
use serde::Serialize;

use super::Error;
use crate::service::UserError;

#[derive(Debug, Serialize)]
struct Body<'a> {
  error: &'static str,
  message: &'a str,
}

impl actix_web::ResponseError for Error {
  fn status_code(&self) -> StatusCode {
    match self.as_user_error() {
      UserError::InvalidArgument(..) => StatusCode::BAD_REQUEST,
      UserError::NotFound => StatusCode::NOT_FOUND,
      UserError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse<BoxBody> {
    let body = match self.as_user_error() {
      UserError::InvalidArgument(message) => Body {
        error: "invalid_argument",
        message: &**message,
      },
      UserError::NotFound => Body {
        error: "not_found",
        message: "user not found",
      },
      UserError::Internal => {
        tracing::error!(error = ?self.report, trace = %self.trace, "internal error occurred");
        Body {
          error: "internal",
          message: "internal server error",
        }
      }
    };
    HttpResponse::build(self.status_code()).json(body)
  }
}

impl From<JsonPayloadError> for Error {
  fn from(value: JsonPayloadError) -> Self {
    Self::invalid_argument(format!("malformed request body: {value}"))
  }
}

impl From<QueryPayloadError> for Error {
  fn from(value: QueryPayloadError) -> Self {
    Self::invalid_argument(format!("malformed query string: {value}"))
  }
}
