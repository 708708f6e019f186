use actix_web::{web, HttpResponse};

use crate::{http::Error, service::UserService, store::UserStore, types::form::users::list};

#[tracing::instrument(skip(service))]
pub async fn list<S: UserStore>(
  service: web::Data<UserService<S>>,
  query: web::Query<list::Request>,
) -> Result<HttpResponse, Error> {
  let page = query.into_inner().into_page_request()?;
  let page = service.list_users(page).await?;
  Ok(HttpResponse::Ok().json(list::Response::from(page)))
}
