use actix_web::{
  web::{self, Json},
  HttpResponse,
};

use crate::{
  http::Error, service::UserService, store::UserStore, types::form::users::update,
};

#[tracing::instrument(skip(service, form))]
pub async fn update<S: UserStore>(
  service: web::Data<UserService<S>>,
  path: web::Path<String>,
  form: Json<update::Request>,
) -> Result<HttpResponse, Error> {
  let id = super::user_id(&path)?;
  let patch = form.into_inner().into_patch()?;
  let user = service.update_user(id, patch).await?;
  Ok(HttpResponse::Ok().json(user))
}
