use actix_web::{web, HttpResponse};

use crate::{http::Error, service::UserService, store::UserStore};

#[tracing::instrument(skip(service))]
pub async fn delete<S: UserStore>(
  service: web::Data<UserService<S>>,
  path: web::Path<String>,
) -> Result<HttpResponse, Error> {
  let id = super::user_id(&path)?;
  service.delete_user(id).await?;
  Ok(HttpResponse::NoContent().finish())
}
