use actix_web::web;

use crate::{http::Error, store::UserStore};

pub mod users;

/// Registers the `/users` routes for a [`UserService`] over `S`,
/// which must be available as `web::Data<UserService<S>>`.
///
/// [`UserService`]: crate::service::UserService
pub fn configure<S: UserStore + 'static>(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|e, _| Error::from(e).into()))
    .app_data(web::QueryConfig::default().error_handler(|e, _| Error::from(e).into()))
    .service(
      web::scope("/users")
        .route("", web::post().to(users::create::<S>))
        .route("", web::get().to(users::list::<S>))
        .route("/{id}", web::get().to(users::get::<S>))
        .route("/{id}", web::patch().to(users::update::<S>))
        .route("/{id}", web::delete().to(users::delete::<S>))
        .route("/{id}/block", web::post().to(users::block::<S>))
        .route("/{id}/unblock", web::post().to(users::unblock::<S>)),
    );
}
