use serde::{Deserialize, Serialize};

use crate::{
  query::{Page, PageRequest},
  service::UserError,
  types::{User, UserId},
};

/// Query string of `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct Request {
  #[serde(default)]
  pub page_size: i32,
  #[serde(default)]
  pub page_token: String,
}

impl Request {
  pub fn into_page_request(self) -> Result<PageRequest, UserError> {
    let token = self.page_token.trim();
    let after = if token.is_empty() {
      None
    } else {
      let raw = token
        .parse::<i64>()
        .map_err(|_| UserError::invalid_argument("invalid page_token"))?;

      // "0" is accepted as an explicit start of the listing
      if raw == 0 {
        None
      } else {
        Some(UserId::try_from(raw).map_err(|_| UserError::invalid_argument("invalid page_token"))?)
      }
    };
    Ok(PageRequest::new(self.page_size, after))
  }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Response {
  pub users: Vec<User>,
  /// Empty once the last page has been reached.
  pub next_page_token: String,
}

impl From<Page<User>> for Response {
  fn from(page: Page<User>) -> Self {
    Self {
      users: page.items,
      next_page_token: page
        .next_token
        .map(|id| id.to_string())
        .unwrap_or_default(),
    }
  }
}
