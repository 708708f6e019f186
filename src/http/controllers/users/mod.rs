use actix_web::web;

use crate::{http::Error, types::UserId};

mod block;
mod create;
mod delete;
mod get;
mod list;
mod update;

pub use block::{block, unblock};
pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use update::update;

/// Reads the `{id}` segment of a user route.
fn user_id(path: &web::Path<String>) -> Result<UserId, Error> {
  path
    .parse::<UserId>()
    .map_err(|e| Error::invalid_argument(e.to_string()))
}
