use actix_web::{web, HttpResponse};

use crate::{http::Error, service::UserService, store::UserStore};

#[tracing::instrument(skip(service))]
pub async fn block<S: UserStore>(
  service: web::Data<UserService<S>>,
  path: web::Path<String>,
) -> Result<HttpResponse, Error> {
  let id = super::user_id(&path)?;
  service.block_user(id).await?;
  Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(skip(service))]
pub async fn unblock<S: UserStore>(
  service: web::Data<UserService<S>>,
  path: web::Path<String>,
) -> Result<HttpResponse, Error> {
  let id = super::user_id(&path)?;
  service.unblock_user(id).await?;
  Ok(HttpResponse::NoContent().finish())
}
