use actix_web::{
  web::{self, Json},
  HttpResponse,
};

use crate::{
  http::Error, service::UserService, store::UserStore, types::form::users::create,
};

#[tracing::instrument(skip_all)]
pub async fn create<S: UserStore>(
  service: web::Data<UserService<S>>,
  form: Json<create::Request>,
) -> Result<HttpResponse, Error> {
  let user = form.into_inner().into_new_user()?;
  let user = service.create_user(user).await?;
  Ok(HttpResponse::Created().json(user))
}
